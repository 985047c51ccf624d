//! Dump every action the parser emits for a demo byte stream.
//!
//! Run with `RUST_LOG=debug` to see the parser's own diagnostics
//! interleaved with the emissions.

use vtdec::{Action, ActionClass, Actor, Parser};

#[derive(Default)]
struct Dumper {
    seq: usize,
}

impl Actor for Dumper {
    fn perform(&mut self, class: ActionClass, action: Action, cp: char) {
        if action == Action::Ignore {
            return;
        }
        self.seq += 1;
        println!("{:03} {class:?}/{action:?} U+{:04X}", self.seq, cp as u32);
    }
}

fn main() {
    env_logger::init();

    let mut parser = Parser::new();
    let mut dumper = Dumper::default();

    let bytes = b"Hello \x1b[1;31mworld\x1b[0m\x07\
                  \x1b]0;demo title\x1b\\\
                  \x1bPqpixel data\x1b\\";
    parser.advance(bytes, &mut dumper);
}
