/// Asserts that evaluating the given block panics. The block may borrow from its surroundings.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(result.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
