// This binary crate is intentionally minimal.
// All trainer logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example linreg
fn main() {
    env_logger::init();
    println!("corten-nn: a minimal feedforward network trainer with epoch-parallel replica averaging.");
    println!("Run `cargo run --example linreg` or `cargo run --example xor` to see it in action.");
}
