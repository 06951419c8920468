#[cfg(target_arch = "wasm32")]
fn main() {
    leavedesk_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("leavedesk-frontend targets wasm32; build it with trunk to run in the browser");
}
