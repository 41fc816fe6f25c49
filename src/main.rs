// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example train_and_save
fn main() {
    println!("forge-nn: a small from-scratch neural network library in Rust.");
    println!("Run `cargo run --example train_and_save` to see the save/load demo.");
    println!("Run `cargo run --bin onnx-nodes -- <model.onnx>` to dump a model's graph nodes.");
}
