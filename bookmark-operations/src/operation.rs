//! Operation metadata and execution traits

use crate::ExecutionResult;
use serde_json::Value;

/// Metadata every operation carries: a verb, a noun and a description.
///
/// The canonical op string ("reorder rows") is what log entries record.
pub trait Operation {
    fn verb(&self) -> &'static str;

    fn noun(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute an operation against a context.
///
/// Execution is synchronous: board mutations happen on the caller's thread,
/// one at a time, with exclusive access to the context.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

/// Implement [`Operation`] for a struct.
///
/// ```ignore
/// operation!(DeleteRow, verb = "delete", noun = "row", description = "Delete a single row");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $description:literal) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    operation!(Ping, verb = "ping", noun = "board", description = "Check the board");

    impl Execute<u32, String> for Ping {
        fn execute(&self, ctx: &mut u32) -> ExecutionResult<Value, String> {
            *ctx += 1;
            ExecutionResult::Unchanged {
                value: Value::from(*ctx),
            }
        }
    }

    #[test]
    fn test_op_string_joins_verb_and_noun() {
        assert_eq!(Ping.op_string(), "ping board");
        assert_eq!(Ping.description(), "Check the board");
    }

    #[test]
    fn test_execute_mutates_context() {
        let mut counter = 0u32;
        Ping.execute(&mut counter);
        let value = Ping.execute(&mut counter).into_result().unwrap();
        assert_eq!(value, Value::from(2));
        assert_eq!(counter, 2);
    }
}
