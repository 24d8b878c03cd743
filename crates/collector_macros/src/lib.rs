use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat};

/// Times a system when the `perf_stats` feature is enabled.
///
/// The body is wrapped in a drop guard that reports the elapsed time through
/// Bevy's `debug!` when it exceeds the threshold (milliseconds, default 1).
/// If the system takes a `tick: Res<SimTick>` parameter the guard also
/// reports every 100th tick, so slow-but-steady systems still show up.
///
/// Without `perf_stats` the guard is compiled out and the function is
/// emitted unchanged.
///
/// ```ignore
/// #[profile]
/// pub fn detect_pickup_contacts(tick: Res<SimTick>, /* ... */) { /* ... */ }
///
/// #[profile(3)]
/// pub fn handle_pickup_contacts(/* ... */) { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn profile(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let threshold_ms: u128 = if attr.is_empty() {
        1
    } else {
        attr.to_string().trim().parse().unwrap_or(1)
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;
    let fn_name = sig.ident.to_string();

    let takes_tick = sig.inputs.iter().any(|arg| {
        let FnArg::Typed(pat_type) = arg else {
            return false;
        };
        let Pat::Ident(pat_ident) = &*pat_type.pat else {
            return false;
        };
        let ty = &pat_type.ty;
        pat_ident.ident == "tick" && quote!(#ty).to_string().contains("SimTick")
    });

    let tick_value = if takes_tick {
        quote! { Some(tick.0) }
    } else {
        quote! { None }
    };

    let output = quote! {
        #(#attrs)*
        #vis #sig {
            #[cfg(feature = "perf_stats")]
            let _profile_guard = {
                struct ProfileGuard {
                    name: &'static str,
                    start: std::time::Instant,
                    tick: Option<u64>,
                }
                impl Drop for ProfileGuard {
                    fn drop(&mut self) {
                        let elapsed = self.start.elapsed();
                        let on_cadence = self.tick.is_some_and(|t| t % 100 == 0);
                        if elapsed.as_millis() > #threshold_ms || on_cadence {
                            bevy::prelude::debug!("[PERF] {}: {:?}", self.name, elapsed);
                        }
                    }
                }
                ProfileGuard {
                    name: #fn_name,
                    start: std::time::Instant::now(),
                    tick: #tick_value,
                }
            };

            #block
        }
    };

    output.into()
}
