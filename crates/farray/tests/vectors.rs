use farray::{prelude::*, ArrayError};
use approx::assert_relative_eq;
use farray_linalg::{vec2, vec3, V2f, V3f};

fn v2f() -> (V2fArray, V2fArray) {
    let a = V2fArray::from([vec2(1.0, 2.0), vec2(3.0, 4.0), vec2(5.0, 6.0)]);
    let b = V2fArray::from([vec2(-1.0, 0.5), vec2(2.0, 2.0), vec2(0.0, 1.0)]);
    (a, b)
}

#[test]
fn v2_arithmetic() -> anyhow::Result<()> {
    farray::init_logger!();

    let (a, b) = v2f();
    assert_eq!(
        a.add(&b)?,
        [vec2(0.0, 2.5), vec2(5.0, 6.0), vec2(5.0, 7.0)]
    );
    assert_eq!(
        a.mul(&b)?,
        [vec2(-1.0, 1.0), vec2(6.0, 8.0), vec2(0.0, 6.0)]
    );
    assert_eq!(
        a.sub_scalar(vec2(1.0, 2.0)),
        [vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(4.0, 4.0)]
    );
    assert_eq!(
        a.rsub_scalar(vec2(1.0, 2.0)),
        [vec2(0.0, 0.0), vec2(-2.0, -2.0), vec2(-4.0, -4.0)]
    );
    assert_eq!(
        a.div_scalar(vec2(2.0, 4.0))?,
        [vec2(0.5, 0.5), vec2(1.5, 1.0), vec2(2.5, 1.5)]
    );
    assert_eq!(a.equal(&a.to_array())?, [1, 1, 1]);
    Ok(())
}

#[test]
fn v2_products() -> anyhow::Result<()> {
    let (a, b) = v2f();
    assert_eq!(a.dot(&b)?, [0.0, 14.0, 6.0]);
    assert_eq!(a.dot(&b)?, b.dot(&a)?);
    assert_eq!(a.dot_vector(vec2(1.0, -1.0)), [-1.0, -1.0, -1.0]);

    assert_eq!(a.cross(&b)?, [2.5, -2.0, 5.0]);
    assert_eq!(b.cross(&a)?, a.cross(&b)?.neg());
    assert_eq!(a.cross_vector(vec2(0.0, 1.0)), [1.0, 3.0, 5.0]);

    let short = V2fArray::new(2);
    let mismatch = ArrayError::LengthMismatch {
        expected: 3,
        actual: 2,
    };
    assert_eq!(a.dot(&short), Err(mismatch.clone()));
    assert_eq!(a.cross(&short), Err(mismatch.clone()));
    assert_eq!(a.add(&short), Err(mismatch));
    Ok(())
}

#[test]
fn v2_scaling() -> anyhow::Result<()> {
    let (a, _) = v2f();
    let s = IntArray::from([2, 0, -1]).cast::<f32>();
    assert_eq!(
        a.scale(&s)?,
        [vec2(2.0, 4.0), vec2(0.0, 0.0), vec2(-5.0, -6.0)]
    );
    assert_eq!(
        a.unscale_scalar(10.0)?,
        [vec2(0.1, 0.2), vec2(0.3, 0.4), vec2(0.5, 0.6)]
    );
    assert!(a.scale(&FloatArray::new(4)).is_err());

    a.scale_assign(&s)?;
    a.unscale_scalar_assign(2.0)?;
    assert_eq!(a, [vec2(1.0, 2.0), vec2(0.0, 0.0), vec2(-2.5, -3.0)]);
    Ok(())
}

#[test]
fn v2_lengths_and_normalization() -> anyhow::Result<()> {
    let (a, _) = v2f();
    assert_eq!(a.length2(), [5.0, 25.0, 61.0]);
    assert_relative_eq!(
        a.length(),
        FloatArray::from([5.0f32.sqrt(), 5.0, 61.0f32.sqrt()])
    );

    let n = a.normalized();
    assert_relative_eq!(n.length(), FloatArray::filled(1.0, 3));
    assert_relative_eq!(n.get(1)?, vec2(0.6, 0.8));

    let zero = V2fArray::from([V2f::ZERO, vec2(0.0, 2.0)]);
    zero.normalize();
    assert_eq!(zero, [V2f::ZERO, vec2(0.0, 1.0)]);
    Ok(())
}

#[test]
fn integer_vectors() -> anyhow::Result<()> {
    let a = V2iArray::from([vec2(3, 4), vec2(-6, 8)]);
    assert_eq!(a.length(), [5, 10]);
    assert_eq!(a.length2(), [25, 100]);
    assert_eq!(a.div_scalar(vec2(2, 3))?, [vec2(1, 1), vec2(-3, 2)]);
    assert_eq!(
        a.div_scalar(vec2(1, 0)),
        Err(ArrayError::DivisionByZero { index: 0 })
    );
    assert_eq!(a.neg(), [vec2(-3, -4), vec2(6, -8)]);

    let f: V2fArray = a.cast();
    assert_eq!(f, [vec2(3.0, 4.0), vec2(-6.0, 8.0)]);
    let s: V2sArray = a.try_cast()?;
    assert_eq!(s.get(1)?, vec2(-6i16, 8));
    Ok(())
}

#[test]
fn v3_products_and_masks() -> anyhow::Result<()> {
    let a = V3fArray::from([
        vec3(1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(1.0, 2.0, 3.0),
        vec3(0.0, 0.0, 2.0),
    ]);
    let b = V3fArray::filled(vec3(0.0, 0.0, 1.0), 4);

    let c = a.cross(&b)?;
    assert_eq!(
        c,
        [
            vec3(0.0, -1.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(2.0, -1.0, 0.0),
            V3f::ZERO,
        ]
    );
    assert_eq!(b.cross(&a)?, c.neg());
    assert_eq!(a.dot(&b)?, [0.0, 0.0, 3.0, 2.0]);

    // Normalize only the vectors longer than 1.
    let long = a.length().greater_scalar(1.0);
    a.mask(&long)?.normalize();
    assert_eq!(a.get(0)?, vec3(1.0, 0.0, 0.0));
    assert_eq!(a.get(3)?, vec3(0.0, 0.0, 1.0));
    assert_relative_eq!(a.length(), FloatArray::filled(1.0, 4));

    // Component-type conversion of the whole array.
    let i: V3iArray = a.scale_scalar(10.0).cast();
    assert_eq!(i.get(2)?, vec3(2, 5, 8));
    assert_eq!(
        V4dArray::filled(farray_linalg::vec4(1.0, 2.0, 3.0, 4.0), 2).length2(),
        [30.0, 30.0]
    );
    Ok(())
}

#[test]
fn integer_products_wrap_on_overflow() -> anyhow::Result<()> {
    let square = 50_000i32.wrapping_mul(50_000);
    let a = V2iArray::from([vec2(50_000, 50_000), vec2(3, 4)]);
    assert_eq!(a.length2(), [square.wrapping_add(square), 25]);
    assert_eq!(a.length(), [26_552, 5]);
    assert_eq!(a.dot(&a)?, a.length2());
    assert_eq!(
        a.cross_vector(vec2(-50_000, 50_000)),
        [square.wrapping_add(square), 350_000]
    );

    let s = V2sArray::from([vec2(300i16, 300)]);
    let sq = 300i16.wrapping_mul(300);
    assert_eq!(s.dot(&s)?, [sq.wrapping_add(sq)]);
    assert_eq!(s.length2(), [-16_608]);
    assert_eq!(s.length(), [0]);
    assert_eq!(
        s.cross(&V2sArray::from([vec2(-300, 300)]))?,
        [sq.wrapping_add(sq)]
    );
    Ok(())
}
