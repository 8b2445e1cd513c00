fn main() {
    #[cfg(target_arch = "wasm32")]
    hr_portal_frontend::mount();
}
