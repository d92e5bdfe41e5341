//! Step traces as JSON lines.
//!
//! [`JsonTrace`] is a [`SortHooks`] implementation that writes one JSON object per step:
//!
//! ```text
//! {"seq":3,"kind":"new_best","markers":{"sorted":0,"compared":1,"best":1},"data":[3,1,2]}
//! ```
//!
//! followed by a single `{"finished":[...]}` line once the sort is done.

use crate::engine::SortHooks;
use crate::step::Step;
use log::warn;
use serde::Serialize;
use std::io;
use std::io::Write;

#[derive(Serialize)]
struct TraceLine<'a, T> {
    seq: usize,
    #[serde(flatten)]
    step: &'a Step,
    data: &'a [T],
}

#[derive(Serialize)]
struct FinishedLine<'a, T> {
    finished: &'a [T],
}

/// Writes every step to `sink` as a JSON line.
///
/// Hooks cannot fail, so write errors are logged and the line is dropped.
pub struct JsonTrace<W: Write> {
    sink: W,
}

impl<W: Write> JsonTrace<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    fn write_line(&mut self, line: &impl Serialize) -> io::Result<()> {
        serde_json::to_writer(&mut self.sink, line)?;
        self.sink.write_all(b"\n")
    }
}

impl<T: Serialize, W: Write> SortHooks<T> for JsonTrace<W> {
    fn on_step(&mut self, seq: usize, step: &Step, data: &[T]) {
        if let Err(err) = self.write_line(&TraceLine { seq, step, data }) {
            warn!("failed to write trace line for step {seq}: {err}");
        }
    }

    fn on_finish(&mut self, data: &[T]) {
        let result = self
            .write_line(&FinishedLine { finished: data })
            .and_then(|()| self.sink.flush());
        if let Err(err) = result {
            warn!("failed to write final trace line: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::engine::SortEngine;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A sink the test can still read after the engine took the hooks.
    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn trace(values: Vec<i64>) -> (usize, Vec<Value>) {
        let sink = Shared::default();
        let mut engine = SortEngine::new(values, Algorithm::Selection)
            .unwrap()
            .with_hooks(JsonTrace::new(sink.clone()));
        let steps = engine.run().count();
        let text = String::from_utf8(sink.0.borrow().clone()).unwrap();
        let lines = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (steps, lines)
    }

    #[test]
    fn one_line_per_step_then_the_result() {
        let (steps, lines) = trace(vec![3, 1, 2]);
        assert_eq!(lines.len(), steps + 1);
        assert_eq!(
            lines[0],
            json!({
                "seq": 0,
                "kind": "initial",
                "markers": {"sorted": 0, "compared": null, "best": null},
                "data": [3, 1, 2],
            })
        );
        for (seq, line) in lines[..steps].iter().enumerate() {
            assert_eq!(line["seq"], json!(seq));
        }
        assert_eq!(lines[steps - 1]["kind"], json!("finished"));
        assert_eq!(lines[steps], json!({"finished": [1, 2, 3]}));
    }

    #[test]
    fn steps_carry_the_data_they_committed() {
        let (_, lines) = trace(vec![2, 1]);
        let swapped = lines
            .iter()
            .find(|line| line["kind"] == json!("swapped"))
            .unwrap();
        assert_eq!(swapped["data"], json!([1, 2]));
        assert_eq!(swapped["markers"]["sorted"], json!(1));
    }
}
