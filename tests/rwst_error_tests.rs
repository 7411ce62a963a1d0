#![cfg(feature = "effect")]

use rwst::effect::Rwst;
use rstest::rstest;

type Failing = Rwst<i32, i32, Result<(i32, i32, Vec<String>), String>>;

mod raising {
    use super::*;

    #[rstest]
    fn raise_error_fails_the_run() {
        let program: Failing = Rwst::raise_error("boom".to_string());
        assert_eq!(program.run(0, 0), Err("boom".to_string()));
    }

    #[rstest]
    fn raise_error_short_circuits_downstream_steps() {
        let program: Failing = Rwst::raise_error("boom".to_string())
            .flat_map(|n: i32| Rwst::pure(n + 1));
        assert_eq!(program.run(0, 0), Err("boom".to_string()));
    }

    #[rstest]
    fn upstream_log_is_lost_with_the_failure() {
        let program: Failing = Rwst::tell(vec!["before".to_string()])
            .then(Rwst::raise_error("boom".to_string()));
        assert_eq!(program.run(0, 0), Err("boom".to_string()));
    }
}

mod recovery {
    use super::*;

    #[rstest]
    fn handle_error_with_recovers_with_the_handler_computation() {
        let program: Failing = Rwst::tell(vec!["before".to_string()])
            .then(Rwst::raise_error("boom".to_string()));
        let recovered = program.handle_error_with(|_| {
            Rwst::tell(vec!["recovered".to_string()]).then(Rwst::pure(0))
        });
        assert_eq!(
            recovered.run(0, 1),
            Ok((0, 1, vec!["recovered".to_string()]))
        );
    }

    #[rstest]
    fn handler_sees_the_error_value() {
        let program: Rwst<i32, i32, Result<(usize, i32, Vec<String>), String>> =
            Rwst::raise_error("boom".to_string());
        let recovered = program.handle_error_with(|error| Rwst::pure(error.len()));
        assert_eq!(recovered.run(0, 0), Ok((4, 0, Vec::new())));
    }

    #[rstest]
    fn recovery_starts_from_the_pre_failure_state() {
        let program: Failing = Rwst::modify(|n: i32| n + 100)
            .then(Rwst::raise_error("boom".to_string()));
        let recovered = program.handle_error_with(|_| Rwst::get());
        // The failed branch's state bump never happened as far as the
        // handler can see.
        assert_eq!(recovered.run(0, 5), Ok((5, 5, Vec::new())));
    }

    #[rstest]
    fn recovery_reads_the_original_environment() {
        let program: Failing = Rwst::raise_error("boom".to_string());
        let recovered = program.handle_error_with(|_| Rwst::ask());
        assert_eq!(recovered.run(42, 0), Ok((42, 0, Vec::new())));
    }

    #[rstest]
    fn successful_computation_never_invokes_the_handler() {
        let program: Failing = Rwst::tell(vec!["kept".to_string()]).then(Rwst::pure(1));
        let guarded = program.handle_error_with(|_| {
            Rwst::tell(vec!["handler ran".to_string()]).then(Rwst::pure(-1))
        });
        assert_eq!(guarded.run(0, 0), Ok((1, 0, vec!["kept".to_string()])));
    }

    #[rstest]
    fn handler_can_fail_again() {
        let program: Failing = Rwst::raise_error("first".to_string());
        let still_failing =
            program.handle_error_with(|error| Rwst::raise_error(format!("{error}, second")));
        assert_eq!(still_failing.run(0, 0), Err("first, second".to_string()));
    }

    #[rstest]
    fn option_effect_recovers_from_absence() {
        let program: Rwst<(), i32, Option<(i32, i32, Vec<String>)>> = Rwst::lift(None);
        let recovered = program.handle_error_with(|()| Rwst::pure(0));
        assert_eq!(recovered.run((), 3), Some((0, 3, Vec::new())));
    }
}

mod laws {
    use super::*;

    #[rstest]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn raise_then_handle_is_the_handler() {
        let handler = |error: String| -> Failing { Rwst::pure(error.len() as i32) };
        let raised: Failing = Rwst::raise_error("test".to_string());
        let handled = raised.handle_error_with(handler);
        assert_eq!(
            handled.run(0, 0),
            handler("test".to_string()).run(0, 0)
        );
    }

    #[rstest]
    fn handle_on_pure_is_identity() {
        let program: Failing = Rwst::pure(42);
        let handled = program.clone().handle_error_with(|_| Rwst::pure(0));
        assert_eq!(handled.run(0, 0), program.run(0, 0));
    }
}
