//! Entry point for the WASM application

pub fn main() {
    dropzone_frontend::run();
}
