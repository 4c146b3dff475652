#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:expr, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| { let _ = $run; })).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
