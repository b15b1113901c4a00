//! Command implementations.
//!
//! Each command works on a decoded object and returns what should be printed,
//! so the logic can be tested without touching stdin or the filesystem.

use ordmap::OrderedMap;
use serde_json::Value;

use crate::cli::{Commands, KeyArgs, SetArgs};

/// A decoded top-level JSON object
pub type Object = OrderedMap<String, Value>;

/// What a command produced
#[derive(Debug, PartialEq)]
pub enum Output {
    /// The (possibly edited) object
    Object(Object),
    /// One line of text per item
    Lines(Vec<String>),
    /// A single JSON value
    Value(Value),
}

/// Run a command against a decoded object
pub fn run(command: &Commands, object: Object) -> Result<Output, Box<dyn std::error::Error>> {
    match command {
        Commands::Keys => Ok(Output::Lines(object.keys().cloned().collect())),
        Commands::Get(KeyArgs { key }) => match object.get(key) {
            Some(value) => Ok(Output::Value(value.clone())),
            None => Err(format!("key not found: {key}").into()),
        },
        Commands::Set(args) => set(args, object),
        Commands::Delete(KeyArgs { key }) => {
            let mut object = object;
            if object.delete(key).is_none() {
                tracing::warn!(key = %key, "key not present; nothing deleted");
            }
            Ok(Output::Object(object))
        }
        Commands::Fmt => Ok(Output::Object(object)),
    }
}

fn set(args: &SetArgs, mut object: Object) -> Result<Output, Box<dyn std::error::Error>> {
    let value = if args.string {
        Value::String(args.value.clone())
    } else {
        serde_json::from_str(&args.value)
            .map_err(|e| format!("value for {} is not valid JSON: {e}", args.key))?
    };

    if !object.set(args.key.clone(), value) {
        tracing::warn!(key = %args.key, "key already present; keeping existing value");
    }
    Ok(Output::Object(object))
}
