#![cfg(feature = "effect")]

use proptest::prelude::*;
use rwst::effect::Rwst;

type Effect = Option<(i32, i32, String)>;
type Program = Rwst<i32, i32, Effect>;

fn run_both(left: &Program, right: &Program, environment: i32, state: i32) -> (Effect, Effect) {
    (left.run(environment, state), right.run(environment, state))
}

proptest! {
    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn functor_identity_law(environment in any::<i32>(), state in any::<i32>(), value in any::<i32>()) {
        let program: Program = Rwst::pure(value);
        let mapped = program.clone().fmap(|x| x);
        let (left, right) = run_both(&mapped, &program, environment, state);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn functor_composition_law(environment in any::<i32>(), state in any::<i32>(), value in -1000i32..1000) {
        let program: Program = Rwst::pure(value);
        let sequential = program.clone().fmap(|x| x + 1).fmap(|x| x * 2);
        let composed = program.fmap(|x| (x + 1) * 2);
        let (left, right) = run_both(&sequential, &composed, environment, state);
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Monad Laws
    // =========================================================================

    #[test]
    fn monad_left_identity_law(environment in any::<i32>(), state in any::<i32>(), value in -1000i32..1000) {
        let step = |x: i32| -> Program {
            Rwst::tell(format!("saw {x}")).then(Rwst::pure(x + 1))
        };
        let chained: Program = Rwst::pure(value).flat_map(step);
        let direct = step(value);
        let (left, right) = run_both(&chained, &direct, environment, state);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn monad_right_identity_law(environment in any::<i32>(), state in any::<i32>(), value in any::<i32>()) {
        let program: Program = Rwst::tell("entry".to_string()).then(Rwst::pure(value));
        let rebound = program.clone().flat_map(Rwst::pure);
        let (left, right) = run_both(&rebound, &program, environment, state);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn monad_associativity_law(environment in any::<i32>(), state in -1000i32..1000, value in -1000i32..1000) {
        let first = |x: i32| -> Program {
            Rwst::tell(format!("f({x})")).then(Rwst::pure(x + 1))
        };
        let second = |x: i32| -> Program {
            Rwst::modify(move |s: i32| s.wrapping_add(x)).then(Rwst::pure(x * 2))
        };

        let grouped_left: Program = Rwst::pure(value).flat_map(first).flat_map(second);
        let grouped_right: Program =
            Rwst::pure(value).flat_map(move |x| first(x).flat_map(second));
        let (left, right) = run_both(&grouped_left, &grouped_right, environment, state);
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Reader Laws
    // =========================================================================

    #[test]
    fn local_identity_law(environment in any::<i32>(), state in any::<i32>()) {
        let program: Program = Rwst::ask();
        let localized = Rwst::local(|e| e, program.clone());
        let (left, right) = run_both(&localized, &program, environment, state);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn local_composition_law(environment in -1000i32..1000, state in any::<i32>()) {
        let inner_modifier = |e: i32| e + 1;
        let outer_modifier = |e: i32| e * 2;

        let nested: Program =
            Rwst::local(outer_modifier, Rwst::local(inner_modifier, Rwst::ask()));
        let composed: Program =
            Rwst::local(move |e| inner_modifier(outer_modifier(e)), Rwst::ask());
        let (left, right) = run_both(&nested, &composed, environment, state);
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Writer Laws
    // =========================================================================

    #[test]
    fn tell_monoid_law(environment in any::<i32>(), state in any::<i32>(), first in ".{0,8}", second in ".{0,8}") {
        let sequenced: Rwst<i32, i32, Option<((), i32, String)>> =
            Rwst::tell(first.clone()).then(Rwst::tell(second.clone()));
        let combined: Rwst<i32, i32, Option<((), i32, String)>> =
            Rwst::tell(format!("{first}{second}"));
        prop_assert_eq!(
            sequenced.run(environment, state),
            combined.run(environment, state)
        );
    }

    #[test]
    fn map2_combines_logs_left_operand_first(environment in any::<i32>(), state in any::<i32>()) {
        let first: Program = Rwst::tell("x".to_string()).then(Rwst::pure(1));
        let second: Program = Rwst::tell("y".to_string()).then(Rwst::pure(2));
        let combined = first.map2(second, |a, b| a + b);
        prop_assert_eq!(
            combined.run(environment, state),
            Some((3, state, "xy".to_string()))
        );
    }

    #[test]
    fn reset_always_restores_log_identity(environment in any::<i32>(), state in any::<i32>(), entry in ".{0,8}") {
        let noisy: Program = Rwst::tell(entry).then(Rwst::pure(1));
        prop_assert_eq!(
            noisy.reset().run(environment, state),
            Some((1, state, String::new()))
        );
    }

    #[test]
    fn reset_then_tell_is_just_tell(environment in any::<i32>(), state in any::<i32>(), noise in ".{0,8}", entry in ".{0,8}") {
        let noisy: Program = Rwst::tell(noise).then(Rwst::pure(0));
        let resumed = noisy.reset().then(Rwst::tell(entry.clone())).then(Rwst::pure(1));
        let plain: Program = Rwst::tell(entry).then(Rwst::pure(1));
        let (left, right) = run_both(&resumed, &plain, environment, state);
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // State Laws
    // =========================================================================

    #[test]
    fn get_put_law(environment in any::<i32>(), state in any::<i32>()) {
        let roundtrip: Rwst<i32, i32, Option<((), i32, String)>> =
            Rwst::get().flat_map(Rwst::put);
        let pure_unit: Rwst<i32, i32, Option<((), i32, String)>> = Rwst::pure(());
        prop_assert_eq!(
            roundtrip.run(environment, state),
            pure_unit.run(environment, state)
        );
    }

    #[test]
    fn put_get_law(environment in any::<i32>(), state in any::<i32>(), new_state in any::<i32>()) {
        let program: Program = Rwst::put(new_state).then(Rwst::get());
        prop_assert_eq!(
            program.run(environment, state),
            Some((new_state, new_state, String::new()))
        );
    }

    #[test]
    fn put_put_law(environment in any::<i32>(), state in any::<i32>(), first in any::<i32>(), second in any::<i32>()) {
        let sequenced: Rwst<i32, i32, Option<((), i32, String)>> =
            Rwst::put(first).then(Rwst::put(second));
        let direct: Rwst<i32, i32, Option<((), i32, String)>> = Rwst::put(second);
        prop_assert_eq!(
            sequenced.run(environment, state),
            direct.run(environment, state)
        );
    }
}
