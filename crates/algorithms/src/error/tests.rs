use super::*;

#[test]
fn test_error_conversion() {
    let core_err = CoreError::from(Error::param("scalar", "must be non-zero"));
    match core_err {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "bls12-381");
            assert_eq!(message, "scalar: must be non-zero");
        }
        _ => panic!("Expected InvalidParameter error"),
    }

    let core_err = CoreError::from(Error::Length {
        context: "G2 point",
        expected: 96,
        actual: 95,
    });
    match core_err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "G2 point");
            assert_eq!(expected, 96);
            assert_eq!(actual, 95);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    let core_err = CoreError::from(Error::encoding("G1 point", "bad flag"));
    assert!(matches!(core_err, CoreError::SerializationError { .. }));

    let core_err = CoreError::from(Error::Processing {
        operation: "map_to_curve_sswu",
        details: "no square root",
    });
    assert!(matches!(
        core_err,
        CoreError::Other {
            context: "map_to_curve_sswu",
            ..
        }
    ));
}

#[test]
fn test_display() {
    assert_eq!(
        Error::param("window", "must be between 1 and 16").to_string(),
        "Invalid parameter 'window': must be between 1 and 16"
    );
    assert_eq!(
        Error::InvalidPoint { context: "pairing" }.to_string(),
        "Point is not on the curve in pairing"
    );
}

#[test]
fn test_result_ext_context() {
    let result: Result<()> = Err(Error::param("count", "must request at least one element"));
    let err = result.with_context("hash_to_field").unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidParameter {
            context: "hash_to_field",
            ..
        }
    ));
}

#[test]
fn test_every_variant_keeps_its_context() {
    let errors = [
        Error::param("count", "too large"),
        Error::Length {
            context: "G1 point",
            expected: 48,
            actual: 0,
        },
        Error::InvalidPoint { context: "pairing" },
        Error::encoding("G2 point", "bad flag"),
        Error::Processing {
            operation: "map_to_curve_sswu",
            details: "no square root",
        },
    ];
    let contexts = [
        "bls12-381",
        "G1 point",
        "pairing",
        "G2 point",
        "map_to_curve_sswu",
    ];

    for (err, expected) in errors.into_iter().zip(contexts) {
        let context = match CoreError::from(err) {
            CoreError::InvalidParameter { context, .. }
            | CoreError::InvalidLength { context, .. }
            | CoreError::SerializationError { context, .. }
            | CoreError::Other { context, .. } => context,
            other => panic!("unexpected conversion: {:?}", other),
        };
        assert_eq!(context, expected);
    }
}
