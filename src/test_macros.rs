/// Assert that the provided `Result<T, E>` is the Ok variant
#[macro_export]
macro_rules! assert_ok {
    ($r:expr) => {{
        let r = $r;
        match r {
            Ok(v) => v,
            Err(e) => panic!("Unexpected error {:?}", e),
        }
    }};
}

/// Assert that the provided `Result<T, E>` is the Error variant
#[macro_export]
macro_rules! assert_err {
    ($r:expr) => {{
        let r = $r;
        match r {
            Ok(v) => panic!("Unexpected success {:?}", v),
            Err(e) => e,
        }
    }};
}

/// Assert that two evaluation results agree, treating NaN as equal to NaN
#[macro_export]
macro_rules! assert_same_value {
    ($a:expr, $b:expr) => {{
        let a: f64 = $a;
        let b: f64 = $b;
        assert!(
            a == b || (a.is_nan() && b.is_nan()),
            "{} and {} are different values",
            a,
            b
        );
    }};
}
