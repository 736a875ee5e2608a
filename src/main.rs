#[cfg(target_arch = "wasm32")]
fn main() {
    pet_adoption_pwa::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "pet-adoption-pwa targets wasm32; build with `trunk serve` or `cargo build --target wasm32-unknown-unknown`."
    );
}
