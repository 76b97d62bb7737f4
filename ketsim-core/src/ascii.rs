//! Plain-text circuit diagrams
//!
//! Renders a circuit log as one wire per qubit (top wire = qubit 1) and one
//! column per entry: boxed gate names, `*` for controls with `|` links on
//! the wires they cross, `(+)` for the controlled-not target, `M` for
//! measurements. Rendering never fails; it is purely a formatting concern.

use crate::log::{CircuitLog, LogEntry, OpKind};
use crate::qubit::Qubit;

const WIRE: char = '-';

/// Renders `log` as a diagram over `nbits` wires.
pub fn render(log: &CircuitLog, nbits: usize) -> String {
    let labels: Vec<String> = (1..=nbits).map(|q| format!("q{}: ", q)).collect();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut lines: Vec<String> = labels
        .into_iter()
        .map(|l| format!("{:<width$}", l, width = label_width))
        .collect();

    for entry in log {
        let cells = column_cells(entry, nbits);
        let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(1);
        for (line, cell) in lines.iter_mut().zip(cells.iter()) {
            line.push(WIRE);
            line.push_str(&center_with_wire(cell, width));
            line.push(WIRE);
        }
    }

    lines.join("\n")
}

/// One cell per wire for a single log entry. Uninvolved wires stay empty
/// and render as plain wire.
fn column_cells(entry: &LogEntry, nbits: usize) -> Vec<String> {
    let mut cells = vec![String::new(); nbits];

    match entry {
        LogEntry::Measurement { target, .. } => {
            set_cell(&mut cells, *target, "M");
        }
        LogEntry::Gate {
            kind,
            targets,
            controls,
        } => {
            let target_symbol = match kind {
                OpKind::Not => "[X]",
                OpKind::Hadamard => "[H]",
                OpKind::PauliZ => "[Z]",
                OpKind::ControlledNot => "(+)",
                _ => "[U]",
            };
            for target in targets {
                set_cell(&mut cells, *target, target_symbol);
            }
            for control in controls {
                set_cell(&mut cells, *control, "*");
            }

            let involved: Vec<usize> = targets
                .iter()
                .chain(controls.iter())
                .map(|q| q.index())
                .collect();
            if let (Some(&low), Some(&high)) = (involved.iter().min(), involved.iter().max()) {
                for q in (low + 1)..high {
                    if q >= 1 && q <= nbits && cells[q - 1].is_empty() {
                        cells[q - 1].push('|');
                    }
                }
            }
        }
    }

    cells
}

fn set_cell(cells: &mut [String], qubit: Qubit, symbol: &str) {
    let index = qubit.index();
    if index >= 1 && index <= cells.len() {
        cells[index - 1] = symbol.to_string();
    }
}

/// Center a cell within `width`, padding with wire characters.
fn center_with_wire(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    if len >= width {
        return cell.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width);
    for _ in 0..left {
        out.push(WIRE);
    }
    out.push_str(cell);
    for _ in 0..right {
        out.push(WIRE);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Gate;

    #[test]
    fn test_render_bell_circuit() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::hadamard(Qubit::new(1)));
        log.record_gate(&Gate::cnot(Qubit::new(1), Qubit::new(2)));
        log.record_measurement(Qubit::new(1), 0);

        let diagram = render(&log, 2);
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "q1: -[H]---*---M-");
        assert_eq!(lines[1], "q2: ------(+)----");
    }

    #[test]
    fn test_top_wire_is_qubit_one() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::not(Qubit::new(3)));

        let diagram = render(&log, 3);
        let lines: Vec<&str> = diagram.lines().collect();
        assert!(lines[0].starts_with("q1:"));
        assert!(!lines[0].contains("[X]"));
        assert!(lines[2].contains("[X]"));
    }

    #[test]
    fn test_control_link_crosses_intermediate_wire() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::cnot(Qubit::new(3), Qubit::new(1)));

        let diagram = render(&log, 3);
        let lines: Vec<&str> = diagram.lines().collect();
        assert!(lines[0].contains("(+)"));
        assert!(lines[1].contains('|'));
        assert!(lines[2].contains('*'));
    }

    #[test]
    fn test_generic_gates_box_as_u() {
        let mut log = CircuitLog::new();
        log.record_gate(&crate::gate::Gate::pauli_z(Qubit::new(1)));
        let y = crate::matrix::Unitary::from_2x2(crate::matrices::PAULI_Y).unwrap();
        log.record_gate(&Gate::single(y, Qubit::new(2)).unwrap());

        let diagram = render(&log, 2);
        let lines: Vec<&str> = diagram.lines().collect();
        assert!(lines[0].contains("[Z]"));
        assert!(lines[1].contains("[U]"));
    }

    #[test]
    fn test_empty_log_renders_bare_wires() {
        let diagram = render(&CircuitLog::new(), 2);
        assert_eq!(diagram, "q1: \nq2: ");
    }
}
