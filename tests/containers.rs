//! Object, array and sequence combinators.

mod common;

use anyhow::Result;
use jfdi::{
    array, int, max_depth_array, max_depth_object, object, sequence, template, terms, Context,
    Generator, GeneratorError, Object, Value,
};

fn render(g: &Generator) -> Result<String> {
    Ok(g.generate()?.to_string())
}

#[test]
fn test_merge_semantics() -> Result<()> {
    common::init_logging();

    let g = object([template! { "a" => 1, "b" => 2 }, template! { "b" => 3 }]);
    assert_eq!(render(&g)?, r#"{"a":1,"b":3}"#);

    let g = object(terms![]);
    assert_eq!(render(&g)?, "{}");
    Ok(())
}

#[test]
fn test_nested_objects() -> Result<()> {
    let g = object([template! {
        "x" => 23,
        "y" => Generator::from_fn(|| Value::Int(42)),
        "z" => object([template! { "a" => 1, "b" => "c" }]),
    }]);
    assert_eq!(render(&g)?, r#"{"x":23,"y":42,"z":{"a":1,"b":"c"}}"#);
    Ok(())
}

#[test]
fn test_depth_cutoff_uses_shared_counter() -> Result<()> {
    common::init_logging();

    let g = max_depth_object(
        1,
        [template! { "x" => 23, "y" => max_depth_object(1, [template! { "z" => 42 }]) }],
    );
    assert_eq!(render(&g)?, r#"{"x":23,"y":null}"#);

    let g = max_depth_object(
        1,
        [template! { "x" => 23, "y" => max_depth_object(2, [template! { "z" => 42 }]) }],
    );
    assert_eq!(render(&g)?, r#"{"x":23,"y":{"z":42}}"#);
    Ok(())
}

#[test]
fn test_sibling_containers_accumulate_depth() -> Result<()> {
    // Both children are structurally at the same level, but the second one
    // sees the counter after the first has already bumped it.
    let g = object([template! {
        "a" => max_depth_object(2, [template! { "v" => 1 }]),
        "b" => max_depth_object(2, [template! { "v" => 2 }]),
    }]);
    assert_eq!(render(&g)?, r#"{"a":{"v":1},"b":null}"#);
    Ok(())
}

#[test]
fn test_reused_context_keeps_counting() -> Result<()> {
    let g = max_depth_object(3, [template! { "v" => 1 }]);
    let mut ctx = Context::with_seed(1);

    assert_eq!(g.call(&mut ctx)?.to_string(), r#"{"v":1}"#);
    assert_eq!(g.call(&mut ctx)?.to_string(), r#"{"v":1}"#);
    assert_eq!(g.call(&mut ctx)?.to_string(), r#"{"v":1}"#);
    assert_eq!(g.call(&mut ctx)?, Value::Null);
    assert_eq!(ctx.depth(), 4);
    Ok(())
}

#[test]
fn test_arrays() -> Result<()> {
    assert_eq!(render(&array(2, 23))?, "[23,23]");
    assert_eq!(render(&array(2, array(3, 0)))?, "[[0,0,0],[0,0,0]]");

    let g = object([template! { "x" => max_depth_array(1, 3, "a") }]);
    assert_eq!(render(&g)?, r#"{"x":null}"#);

    let g = object([template! { "x" => max_depth_array(2, 3, "a") }]);
    assert_eq!(render(&g)?, r#"{"x":["a","a","a"]}"#);
    Ok(())
}

#[test]
fn test_array_of_dice() -> Result<()> {
    let mut ctx = Context::with_seed(6);
    let g = array(3, int(1, 6)?);

    for _ in 0..20 {
        let value = g.call(&mut ctx)?;
        let rolls = value.as_array().expect("array");
        assert_eq!(rolls.len(), 3);
        for roll in rolls {
            let n = roll.as_value().and_then(Value::as_i64).expect("int");
            assert!((1..=6).contains(&n));
        }
    }
    Ok(())
}

#[test]
fn test_sequences() -> Result<()> {
    assert_eq!(render(&sequence(terms![2, sequence([3, 4])]))?, "[2,[3,4]]");
    assert_eq!(render(&sequence([3, 42]))?, "[3,42]");
    Ok(())
}

#[test]
fn test_fail_fast() {
    common::init_logging();

    assert!(matches!(
        object([42]).generate(),
        Err(GeneratorError::TypeMismatch { .. })
    ));
    assert!(matches!(
        array(-1, 0).generate(),
        Err(GeneratorError::InvalidArgument(_))
    ));
    assert!(matches!(
        array(i64::MAX, 0).generate(),
        Err(GeneratorError::InvalidArgument(_))
    ));

    // A bad leaf deep in the tree aborts the whole expansion
    let g = object([template! {
        "ok" => 1,
        "deep" => sequence(terms![1, array(2, object([template! { "bad" => array(-5, 0) }]))]),
    }]);
    assert!(matches!(
        g.generate(),
        Err(GeneratorError::InvalidArgument(_))
    ));
}

#[test]
fn test_unexpanded_literal_generators_fail_to_render() {
    // Generators inside a literal value are not expanded by their parent
    let mut inner = Object::new();
    inner.insert("g", Generator::from_fn(|| Value::Int(1)));
    let g = object([template! { "literal" => inner }]);

    let value = g.generate().expect("expansion succeeds");
    let rendered = value.as_object().expect("object").to_string();
    assert!(rendered.contains("could not marshal object"), "{rendered}");
}
