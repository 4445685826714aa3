//! Object graph decoder.
//!
//! Reconstructs an [`Object`] from a JSON byte stream. A JSON object whose
//! only key is `__reduce__` describes a reduce step:
//!
//! ```text
//! {"__reduce__": ["os.system", ["touch /tmp/marker"]]}
//! ```
//!
//! The arguments are reconstructed first, then the named callable runs and
//! its return value replaces the node. Callables execute during decoding,
//! before the caller ever sees the object.

use std::fmt;
use std::process::Command;

use serde_json::Value;
use thiserror::Error;

use crate::{repr, shell};

/// Key marking a reduce step.
pub const REDUCE_KEY: &str = "__reduce__";

/// Errors raised while reconstructing an object graph.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid object stream: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("malformed reduce step: {0}")]
    MalformedReduce(String),

    #[error("unknown callable '{0}'")]
    UnknownCallable(String),

    #[error("{callable}() expected {expected}")]
    BadArguments {
        callable: &'static str,
        expected: &'static str,
    },

    #[error("Command {command} returned non-zero exit status {status}.")]
    CalledProcess { command: String, status: i32 },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// A reconstructed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    List(Vec<Object>),
    Dict(Vec<(String, Object)>),
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::None => write!(f, "None"),
            Object::Bool(true) => write!(f, "True"),
            Object::Bool(false) => write!(f, "False"),
            Object::Int(i) => write!(f, "{}", i),
            Object::Float(x) => write!(f, "{}", repr::float(*x)),
            Object::Str(s) => write!(f, "{}", repr::quote(s)),
            Object::List(items) => {
                let items: Vec<String> = items.iter().map(Object::to_string).collect();
                write!(f, "{}", repr::list(&items))
            }
            Object::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", repr::quote(k), v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

type Callable = fn(Vec<Object>) -> Result<Object, DecodeError>;

/// Callables a reduce step may name.
static CALLABLES: &[(&str, Callable)] = &[
    ("os.system", os_system),
    ("subprocess.check_output", check_output),
];

/// Decode bytes into an object, running every reduce step encountered.
pub fn loads(bytes: &[u8]) -> Result<Object, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    reconstruct(value)
}

fn reconstruct(value: Value) -> Result<Object, DecodeError> {
    Ok(match value {
        Value::Null => Object::None,
        Value::Bool(b) => Object::Bool(b),
        Value::Number(n) => match n.as_i64().map(i128::from).or(n.as_u64().map(i128::from)) {
            Some(i) => Object::Int(i),
            None => Object::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Object::Str(s),
        Value::Array(items) => Object::List(
            items
                .into_iter()
                .map(reconstruct)
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(mut map) => {
            if let Some(step) = map.remove(REDUCE_KEY) {
                if !map.is_empty() {
                    let extra: Vec<&str> = map.keys().map(String::as_str).collect();
                    return Err(DecodeError::MalformedReduce(format!(
                        "unexpected keys beside {}: {}",
                        REDUCE_KEY,
                        extra.join(", ")
                    )));
                }
                return reduce(step);
            }
            Object::Dict(
                map.into_iter()
                    .map(|(k, v)| Ok((k, reconstruct(v)?)))
                    .collect::<Result<_, DecodeError>>()?,
            )
        }
    })
}

fn reduce(step: Value) -> Result<Object, DecodeError> {
    let Value::Array(mut parts) = step else {
        return Err(DecodeError::MalformedReduce(
            "expected [callable, [args...]]".into(),
        ));
    };
    if parts.len() != 2 {
        return Err(DecodeError::MalformedReduce(format!(
            "expected 2 elements, got {}",
            parts.len()
        )));
    }

    let args = parts.pop().unwrap_or(Value::Null);
    let name = match parts.pop() {
        Some(Value::String(name)) => name,
        _ => return Err(DecodeError::MalformedReduce("callable must be a string".into())),
    };
    let args = match reconstruct(args)? {
        Object::List(args) => args,
        other => vec![other],
    };

    let callable = CALLABLES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| *f)
        .ok_or(DecodeError::UnknownCallable(name.clone()))?;

    tracing::debug!(callable = %name, args = args.len(), "Applying reduce step");
    callable(args)
}

fn os_system(args: Vec<Object>) -> Result<Object, DecodeError> {
    match args.as_slice() {
        [Object::Str(command)] => Ok(Object::Int(shell::system(command)?.into())),
        _ => Err(DecodeError::BadArguments {
            callable: "system",
            expected: "a single command string",
        }),
    }
}

fn check_output(args: Vec<Object>) -> Result<Object, DecodeError> {
    let argv: Vec<String> = match args.as_slice() {
        [Object::List(argv)] => argv
            .iter()
            .map(|a| match a {
                Object::Str(s) => Some(s.clone()),
                _ => None,
            })
            .collect::<Option<_>>(),
        _ => None,
    }
    .filter(|argv: &Vec<String>| !argv.is_empty())
    .ok_or(DecodeError::BadArguments {
        callable: "check_output",
        expected: "a non-empty list of strings",
    })?;

    let output = Command::new(&argv[0]).args(&argv[1..]).output()?;
    if !output.status.success() {
        let items: Vec<String> = argv.iter().map(|a| repr::quote(a)).collect();
        return Err(DecodeError::CalledProcess {
            command: repr::list(&items),
            status: output.status.code().unwrap_or(shell::SIGNALED),
        });
    }
    Ok(Object::Str(String::from_utf8_lossy(&output.stdout).into_owned()))
}
