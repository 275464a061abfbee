use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::thread;

use precond::check::{check_in_range_epsilon, check_true};
use precond::{
    assert_false, assert_in_range_epsilon, assert_in_range_with, assert_not_nil, assert_true,
    RangeOpts,
};
use proptest::prelude::*;

thread_local! {
    static PANIC_LOCATION: RefCell<Option<(String, u32)>> = const { RefCell::new(None) };
}

fn install_location_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if let Some(location) = info.location() {
                let seen = (location.file().to_owned(), location.line());
                PANIC_LOCATION.with(|slot| *slot.borrow_mut() = Some(seen));
            }
            previous(info);
        }));
    });
}

fn panic_location(f: impl FnOnce()) -> Option<(String, u32)> {
    install_location_hook();
    PANIC_LOCATION.with(|slot| slot.borrow_mut().take());
    let _ = panic::catch_unwind(AssertUnwindSafe(f));
    PANIC_LOCATION.with(|slot| slot.borrow_mut().take())
}

fn payload_text(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .unwrap_or_default(),
    }
}

fn panic_message(f: impl FnOnce()) -> Option<String> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .err()
        .map(payload_text)
}

#[test]
fn true_panics_with_plain_message() {
    let message = panic_message(|| assert_true!(false, "message")).expect("panic");
    assert!(message.starts_with("message"));
}

#[test]
fn true_panics_with_one_argument() {
    let message = panic_message(|| assert_true!(false, "message {}", 12)).expect("panic");
    assert!(message.starts_with("message 12"));
}

#[test]
fn true_panics_with_two_arguments() {
    let message = panic_message(|| assert_true!(false, "message {} -{}", 12, 122)).expect("panic");
    assert!(message.starts_with("message 12 -122"));
}

#[test]
fn not_nil_panics_with_message_starting_with_template() {
    let message = panic_message(|| {
        assert_not_nil!(None::<String>, "msg");
    })
    .expect("panic");
    assert!(message.starts_with("msg"));
}

#[test]
fn payload_matches_check_layer_message() {
    let violation = check_in_range_epsilon!(1.0, 0.0, 0.0, 0.1, "sample {} out of {}", 1, "band")
        .unwrap_err();
    let message = panic_message(|| {
        assert_in_range_epsilon!(1.0, 0.0, 0.0, 0.1, "sample {} out of {}", 1, "band")
    })
    .expect("panic");
    assert_eq!(message, violation.message());
}

#[test]
fn macro_panic_points_at_call_site() {
    let expected = Some((file!().to_owned(), line!() + 1));
    let seen = panic_location(|| assert_true!(false, "here"));
    assert_eq!(seen, expected);

    let expected = Some((file!().to_owned(), line!() + 1));
    let seen = panic_location(|| assert_in_range_epsilon!(2.0, 0.0, 1.0, 0.1, "here"));
    assert_eq!(seen, expected);
}

#[test]
fn function_panic_points_at_call_site() {
    let expected = Some((file!().to_owned(), line!() + 1));
    let seen = panic_location(|| assert_false(true, format_args!("here")));
    assert_eq!(seen, expected);

    let opts = RangeOpts::default();
    let expected = Some((file!().to_owned(), line!() + 1));
    let seen = panic_location(|| assert_in_range_with(2.0, 0.0, 1.0, &opts, format_args!("x")));
    assert_eq!(seen, expected);

    let expected = Some((file!().to_owned(), line!() + 1));
    let seen = panic_location(|| drop(assert_not_nil(None::<String>, format_args!("here"))));
    assert_eq!(seen, expected);
}

#[test]
fn passing_assertion_returns_normally() {
    assert_eq!(panic_message(|| assert_true!(true, "unused")), None);
}

#[test]
fn panic_stays_on_the_failing_thread() {
    let failing = thread::spawn(|| assert_true!(false, "worker {} broke", 3));
    let healthy = thread::spawn(|| {
        assert_true!(true, "unused");
        7
    });

    let payload = failing.join().expect_err("worker should have panicked");
    assert_eq!(payload_text(payload), "worker 3 broke");
    assert_eq!(healthy.join().expect("healthy worker"), 7);
}

proptest! {
    #[test]
    fn assertion_panics_iff_check_fails(predicate in any::<bool>(), code in any::<u32>()) {
        let expected = check_true!(predicate, "code {}", code).err().map(|v| v.into_message());
        let actual = panic_message(|| assert_true!(predicate, "code {}", code));
        prop_assert_eq!(actual, expected);
    }
}
