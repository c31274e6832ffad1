use farray::{prelude::*, ArrayError};

fn mask() -> IntArray {
    IntArray::from([1, 0, 0, 1, 1, 0, 0, 1, 0, 1])
}

fn floats() -> FloatArray {
    FloatArray::from([1.25, 2.5, 1.0, 1.75, 5.25, 7.0, 4.25, 1.0, 0.5, 3.5])
}

#[test]
fn masked_float_aliasing() -> anyhow::Result<()> {
    farray::init_logger!();

    let f = floats();
    let m = mask();
    let mf = f.mask(&m)?;
    assert_eq!(mf.len(), 5);
    assert_eq!(mf, [1.25, 1.75, 5.25, 1.0, 3.5]);
    assert_eq!(mf.get(4)?, f.get(9)?);

    f.set(9, 1.75)?;
    assert_eq!(mf.get(4)?, 1.75);

    mf.set(3, 10.5)?;
    assert_eq!(f.get(7)?, 10.5);
    assert_eq!(f, [1.25, 2.5, 1.0, 1.75, 5.25, 7.0, 4.25, 10.5, 0.5, 1.75]);

    Ok(())
}

#[test]
fn mask_of_wrong_length() {
    let f = floats();
    let err = f.mask(&IntArray::new(9)).unwrap_err();
    assert_eq!(
        err,
        ArrayError::LengthMismatch {
            expected: 10,
            actual: 9
        }
    );
}

#[test]
fn slice_of_mask_copies() -> anyhow::Result<()> {
    let f = floats();
    let mf = f.mask(&mask())?;
    let copy = mf.copy_slice(1..3);
    assert_eq!(copy, [1.75, 5.25]);

    copy.set(0, 0.0)?;
    assert_eq!(f.get(3)?, 1.75);
    Ok(())
}

#[test]
fn masked_in_place_and_full_length_assignment() -> anyhow::Result<()> {
    let f = floats();
    let g = FloatArray::from_fn(10, |i| i as f32);
    let m = mask();

    // The right-hand side is masked the same way as the target.
    f.mask(&m)?.add_assign(&g.mask(&m)?)?;
    assert_eq!(f, [1.25, 2.5, 1.0, 4.75, 9.25, 7.0, 4.25, 8.0, 0.5, 12.5]);

    // Assigning from a full-length source takes each selected element from its own index.
    let neg = f.neg();
    f.set_masked(&m, &neg)?;
    assert_eq!(
        f,
        [-1.25, 2.5, 1.0, -4.75, -9.25, 7.0, 4.25, -8.0, 0.5, -12.5]
    );
    Ok(())
}

#[test]
fn masked_int_operations() -> anyhow::Result<()> {
    let f = IntArray::from([1, 2, 9, 1, 5, 7, 4, 1, 6, 3]);
    let m = f.greater_scalar(4);
    assert_eq!(m, [0, 0, 1, 0, 1, 1, 0, 0, 1, 0]);

    let mf = f.mask(&m)?;
    assert_eq!(mf, [9, 5, 7, 6]);
    mf.rem_scalar_assign(4)?;
    assert_eq!(f, [1, 2, 1, 1, 1, 3, 4, 1, 2, 3]);

    f.set_masked_scalar(&f.equal_scalar(1), 0)?;
    assert_eq!(f, [0, 2, 0, 0, 0, 3, 4, 0, 2, 3]);
    Ok(())
}

#[test]
fn masked_composite() -> anyhow::Result<()> {
    let f = FloatArray::from([1.0, 2.0, 3.0, 4.0, 5.0]);
    let g = FloatArray::from([10.0, 20.0, 30.0, 40.0, 50.0]);
    let h = FloatArray::from([0.5, 0.5, 0.5, 0.5, 0.5]);
    let m = IntArray::from([0, 1, 0, 1, 1]);

    let result = f.to_array();
    let sum = g.mask(&m)?.add(&h.mask(&m)?)?;
    assert_eq!(sum.len(), 3);
    result.set_masked(&m, &sum)?;
    assert_eq!(result, [1.0, 20.5, 3.0, 40.5, 50.5]);
    assert_eq!(f, [1.0, 2.0, 3.0, 4.0, 5.0]);
    Ok(())
}

#[test]
fn masked_view_of_view() -> anyhow::Result<()> {
    let f = floats();
    let outer = f.mask(&mask())?;
    let inner = outer.mask(&outer.greater_scalar(1.5))?;
    assert_eq!(inner, [1.75, 5.25, 3.5]);
    assert_eq!(inner.positions(), &[3, 4, 9]);

    inner.mul_scalar_assign(2.0);
    assert_eq!(f.get(4)?, 10.5);
    assert_eq!(outer, [1.25, 3.5, 10.5, 1.0, 7.0]);
    Ok(())
}

#[test]
fn negative_indices() -> anyhow::Result<()> {
    let f = floats();
    for i in 1..=f.len() as isize {
        assert_eq!(f.get(-i)?, f.get(f.len() as isize - i)?);
    }
    let mf = f.mask(&mask())?;
    assert_eq!(mf.get(-1)?, 3.5);
    assert_eq!(
        mf.get(-6),
        Err(ArrayError::IndexOutOfRange { index: -6, len: 5 })
    );
    Ok(())
}

#[test]
fn masked_count_and_order() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5eed_f00d);
    for _ in 0..50 {
        let len = rng.usize(0..40);
        let values = IntArray::from_fn(len, |_| rng.i32(-100..100));
        let m = FixedArray::from_fn(len, |_| rng.bool());

        let view = values.mask(&m)?;
        let selected: Vec<usize> = (0..len)
            .filter(|&i| m.get(i as isize) == Ok(true))
            .collect();
        assert_eq!(view.len(), selected.len());
        assert_eq!(view.positions(), selected.as_slice());
        for (k, &i) in selected.iter().enumerate() {
            assert_eq!(view.get(k as isize)?, values.get(i as isize)?);
        }
    }
    Ok(())
}

#[test]
fn scatter_isolation() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
    for _ in 0..50 {
        let len = rng.usize(1..30);
        let f = DoubleArray::from_fn(len, |_| rng.f64());
        let g = DoubleArray::from_fn(len, |_| rng.f64() * 10.0);
        let m = IntArray::from_fn(len, |_| rng.i32(0..2));

        let result = f.to_array();
        result.set_masked(&m, &g.mask(&m)?.mul_scalar(3.0))?;
        for i in 0..len as isize {
            let expected = if m.get(i)? != 0 {
                g.get(i)? * 3.0
            } else {
                f.get(i)?
            };
            assert_eq!(result.get(i)?, expected);
        }

        // In-place through a view never touches unselected elements either.
        let target = f.to_array();
        target.mask(&m)?.add_assign(&g.mask(&m)?)?;
        for i in 0..len as isize {
            if m.get(i)? == 0 {
                assert_eq!(target.get(i)?, f.get(i)?);
            } else {
                assert_eq!(target.get(i)?, f.get(i)? + g.get(i)?);
            }
        }
    }
    Ok(())
}

#[test]
fn aliasing_both_ways_randomized() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(7);
    let f = IntArray::from_fn(20, |i| i as i32);
    let m = IntArray::from_fn(20, |_| rng.i32(0..2));
    let view = f.mask(&m)?;
    if view.is_empty() {
        return Ok(());
    }

    for _ in 0..20 {
        let k = rng.usize(0..view.len());
        let i = view.positions()[k] as isize;
        let value = rng.i32(..);

        view.set(k as isize, value)?;
        assert_eq!(f.get(i)?, value);

        f.set(i, value.wrapping_add(1))?;
        assert_eq!(view.get(k as isize)?, value.wrapping_add(1));
    }
    Ok(())
}

#[test]
fn copies_are_independent() -> anyhow::Result<()> {
    let f = floats();
    let s = f.copy_slice(..);
    let c = f.clone();
    let t = f.mask(&mask())?.to_array();

    s.fill(0.0);
    c.fill(0.0);
    t.fill(0.0);
    assert_eq!(f, floats());

    f.fill(1.0);
    assert_eq!(s, FloatArray::new(10));
    assert_eq!(t, FloatArray::new(5));
    Ok(())
}
