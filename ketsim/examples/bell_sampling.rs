//! Bell pair preparation, sampling, and export
//!
//! Prepares (|00> + |11>)/sqrt(2), draws a histogram of whole-register
//! samples without collapsing the state, then measures both qubits for
//! real and exports the finished circuit as OpenQASM 2.0.
//!
//! Run with: cargo run --example bell_sampling -p ketsim

use ketsim::{ascii, basis_label, qasm, Gate, Qubit, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Fresh entropy so the histogram varies run to run
    let mut rng = StdRng::from_entropy();
    let mut sim = Simulator::new(2).unwrap();

    sim.apply(&Gate::hadamard(Qubit::new(1))).unwrap();
    sim.apply(&Gate::cnot(Qubit::new(1), Qubit::new(2))).unwrap();

    println!("=== Bell pair ===\n");
    println!("{}\n", ascii::render(sim.log(), sim.nbits()));

    // Histogram without collapse: only |00> and |11> ever show up
    let shots = 1024;
    let counts = sim.sample(shots, &mut rng);

    println!("{} shots:", shots);
    for (index, count) in counts.ranked() {
        println!(
            "  {}  {:>5}  ({:.1}%)",
            basis_label(index, sim.nbits()),
            count,
            100.0 * counts.frequency(index)
        );
    }
    println!();

    // Now collapse for real; the two outcomes always agree
    let first = sim.measure(Qubit::new(1), &mut rng).unwrap();
    let second = sim.measure(Qubit::new(2), &mut rng).unwrap();
    assert_eq!(first, second);
    println!("measured q1 = {}, q2 = {}\n", first, second);

    println!("{}\n", sim.log());

    println!("OpenQASM 2.0 with measurements:");
    println!(
        "{}",
        qasm::export_with_measurements(sim.log(), sim.nbits()).unwrap()
    );
}
