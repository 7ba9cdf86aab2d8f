//! Output.

use std::io::{self, Write};

use mlisp_value::{Arity, BuiltinFn, Value};

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![(
        "prn",
        Value::Builtin(BuiltinFn {
            name: "prn",
            arity: Arity::AtLeast(0),
            func: |args, _| {
                // A closed stdout is not an evaluation error.
                let _ = print_line(&mut io::stdout().lock(), args);
                Ok(Value::Nil)
            },
        }),
    )]
}

/// Space-joined renders plus a newline; nothing at all without arguments.
fn print_line(out: &mut impl Write, args: &[Value]) -> io::Result<()> {
    if args.is_empty() {
        return Ok(());
    }
    let line = args.iter().map(Value::render).collect::<Vec<_>>().join(" ");
    writeln!(out, "{line}")
}
