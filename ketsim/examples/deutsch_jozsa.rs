//! Deutsch-Jozsa on a single input qubit
//!
//! One oracle call decides whether f: {0,1} -> {0,1} is constant or
//! balanced, a task that classically needs both evaluations. The final
//! measurement is deterministic for every oracle, so the verdict never
//! depends on the rng.
//!
//! Run with: cargo run --example deutsch_jozsa -p ketsim

use ketsim::{ascii, qasm, Gate, Qubit, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const INPUT: Qubit = Qubit::new(1);
const ANCILLA: Qubit = Qubit::new(2);

/// The four 1-bit oracles, as what they do to the ancilla.
enum Oracle {
    ConstantZero,
    ConstantOne,
    Identity,
    Negation,
}

impl Oracle {
    fn name(&self) -> &str {
        match self {
            Oracle::ConstantZero => "f(x) = 0",
            Oracle::ConstantOne => "f(x) = 1",
            Oracle::Identity => "f(x) = x",
            Oracle::Negation => "f(x) = not x",
        }
    }

    fn is_balanced(&self) -> bool {
        matches!(self, Oracle::Identity | Oracle::Negation)
    }

    /// Applies |x, y> -> |x, y xor f(x)> with x on q1 and y on q2.
    fn apply(&self, sim: &mut Simulator) {
        match self {
            Oracle::ConstantZero => {}
            Oracle::ConstantOne => sim.apply(&Gate::not(ANCILLA)).unwrap(),
            Oracle::Identity => sim.apply(&Gate::cnot(INPUT, ANCILLA)).unwrap(),
            Oracle::Negation => {
                sim.apply(&Gate::not(ANCILLA)).unwrap();
                sim.apply(&Gate::cnot(INPUT, ANCILLA)).unwrap();
            }
        }
    }
}

fn run(oracle: &Oracle, rng: &mut StdRng) -> Simulator {
    // Input x = 0 on q1, ancilla y = 1 on q2
    let mut sim = Simulator::with_basis(2, 0b10).unwrap();

    sim.apply(&Gate::hadamard(INPUT)).unwrap();
    sim.apply(&Gate::hadamard(ANCILLA)).unwrap();
    oracle.apply(&mut sim);
    sim.apply(&Gate::hadamard(INPUT)).unwrap();

    let outcome = sim.measure(INPUT, rng).unwrap();
    let verdict = if outcome == 1 { "balanced" } else { "constant" };

    println!("{:12} measured q1 = {}, so {}", oracle.name(), outcome, verdict);
    assert_eq!(outcome == 1, oracle.is_balanced());

    sim
}

fn main() {
    println!("=== Deutsch-Jozsa ===\n");

    let mut rng = StdRng::seed_from_u64(2026);
    let oracles = [
        Oracle::ConstantZero,
        Oracle::ConstantOne,
        Oracle::Identity,
        Oracle::Negation,
    ];

    let mut last = None;
    for oracle in &oracles {
        let sim = run(oracle, &mut rng);
        println!("{}\n", ascii::render(sim.log(), sim.nbits()));
        last = Some(sim);
    }

    let sim = last.unwrap();
    println!("OpenQASM 2.0 for the {} circuit:", oracles[3].name());
    println!(
        "{}",
        qasm::export_with_measurements(sim.log(), sim.nbits()).unwrap()
    );
}
