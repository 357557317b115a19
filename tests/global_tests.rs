//! Exercises the process-wide shared store through the crate-level free
//! functions. The store is global to the test binary and tests run
//! concurrently, so every test owns its keys.

use sovran_store::StoreError;
use std::fmt;
use std::thread;

#[derive(Debug, Clone, PartialEq, Default)]
struct Fixture {
    svalue: String,
    ivalue: i32,
}

#[test]
fn test_set_then_get() {
    sovran_store::set("myint", 42i32);
    assert_eq!(sovran_store::get::<i32>("myint"), 42);

    sovran_store::set("myfloat", 3.14f64);
    assert_eq!(sovran_store::get::<f64>("myfloat"), 3.14);

    sovran_store::set("mystring", "hello, world!".to_string());
    assert_eq!(sovran_store::get::<String>("mystring"), "hello, world!");
}

#[test]
fn test_get_zero_value() {
    // Never set: the zero value of the requested type comes back
    assert_eq!(sovran_store::get::<i32>("myzero"), 0);
    assert_eq!(sovran_store::get::<String>("myzero"), "");
}

#[test]
fn test_struct_values() {
    let input = Fixture {
        svalue: "hello, world!".to_string(),
        ivalue: 42,
    };

    sovran_store::set("mystruct", input.clone());
    assert_eq!(sovran_store::get::<Fixture>("mystruct"), input);
    assert_eq!(sovran_store::get_e::<Fixture>("mystruct"), Ok(input));
}

#[test]
fn test_get_e_value_not_found() {
    match sovran_store::get_e::<i32>("novalue") {
        Err(StoreError::ValueNotFound(key)) => assert_eq!(key, "novalue"),
        other => panic!("expected ValueNotFound but got: {:?}", other),
    }
}

#[test]
fn test_get_e_wrong_type() {
    sovran_store::set("wrongtype", 42i32);
    match sovran_store::get_e::<String>("wrongtype") {
        Err(StoreError::WrongType(requested)) => {
            assert_eq!(requested, std::any::type_name::<String>())
        }
        other => panic!("expected WrongType but got: {:?}", other),
    }
}

#[test]
fn test_get_e_round_trips() {
    sovran_store::set("eint", 42i32);
    assert_eq!(sovran_store::get_e::<i32>("eint"), Ok(42));

    sovran_store::set("efloat", 3.14f64);
    assert_eq!(sovran_store::get_e::<f64>("efloat"), Ok(3.14));

    sovran_store::set("estring", "hello, world!".to_string());
    assert_eq!(
        sovran_store::get_e::<String>("estring"),
        Ok("hello, world!".to_string())
    );
}

#[test]
fn test_overwrite() {
    sovran_store::set("overwrite", 42i32);
    sovran_store::set("overwrite", "hello".to_string());

    assert_eq!(sovran_store::get::<String>("overwrite"), "hello");
    // The old type association is gone along with the old value
    assert_eq!(sovran_store::get::<i32>("overwrite"), 0);
    assert!(matches!(
        sovran_store::get_e::<i32>("overwrite"),
        Err(StoreError::WrongType(_))
    ));
}

#[test]
fn test_pi() {
    sovran_store::set("pi", 3.14f64);

    assert_eq!(sovran_store::get::<f64>("pi"), 3.14);
    assert!(matches!(
        sovran_store::get_e::<i32>("pi"),
        Err(StoreError::WrongType(_))
    ));
    assert_eq!(sovran_store::get::<i32>("pi"), 0);
}

#[test]
fn test_concurrent_writers_disjoint_keys() {
    let mut handles = vec![];
    for i in 0..8i32 {
        handles.push(thread::spawn(move || {
            sovran_store::set(format!("global-worker-{}", i), i);
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..8i32 {
        assert_eq!(
            sovran_store::get::<i32>(&format!("global-worker-{}", i)),
            i
        );
    }
}

// An enum-like key type, rendered deterministically
struct MenuKey(&'static str);

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_stringer_set_then_get() {
    sovran_store::stringer_set(MenuKey("stringerint"), 42i32);
    assert_eq!(sovran_store::stringer_get::<_, i32>(MenuKey("stringerint")), 42);

    sovran_store::stringer_set(MenuKey("stringerfloat"), 3.14f64);
    assert_eq!(
        sovran_store::stringer_get::<_, f64>(MenuKey("stringerfloat")),
        3.14
    );

    sovran_store::stringer_set(MenuKey("stringerstring"), "hello, world!".to_string());
    assert_eq!(
        sovran_store::stringer_get::<_, String>(MenuKey("stringerstring")),
        "hello, world!"
    );
}

#[test]
fn test_stringer_get_zero_value() {
    assert_eq!(sovran_store::stringer_get::<_, i32>(MenuKey("stringerzero")), 0);
}

#[test]
fn test_stringer_aliases_string_key() {
    // A stringer key and its rendered form address the same entry
    sovran_store::stringer_set(MenuKey("examplekey"), "myvalue".to_string());

    assert_eq!(sovran_store::get::<String>("examplekey"), "myvalue");
    assert_eq!(
        sovran_store::stringer_get::<_, String>(MenuKey("examplekey")),
        "myvalue"
    );
}

#[test]
fn test_stringer_get_e() {
    match sovran_store::stringer_get_e::<_, i32>(MenuKey("stringernotfound")) {
        Err(StoreError::ValueNotFound(key)) => assert_eq!(key, "stringernotfound"),
        other => panic!("expected ValueNotFound but got: {:?}", other),
    }

    sovran_store::stringer_set(MenuKey("stringerwrongtype"), 42i32);
    assert!(matches!(
        sovran_store::stringer_get_e::<_, String>(MenuKey("stringerwrongtype")),
        Err(StoreError::WrongType(_))
    ));

    sovran_store::stringer_set(MenuKey("stringereint"), 42i32);
    assert_eq!(
        sovran_store::stringer_get_e::<_, i32>(MenuKey("stringereint")),
        Ok(42)
    );

    sovran_store::stringer_set(
        MenuKey("stringerestruct"),
        Fixture {
            svalue: "hello, world!".to_string(),
            ivalue: 42,
        },
    );
    assert_eq!(
        sovran_store::stringer_get_e::<_, Fixture>(MenuKey("stringerestruct")),
        Ok(Fixture {
            svalue: "hello, world!".to_string(),
            ivalue: 42,
        })
    );
}

#[test]
fn test_shared_store_instance_operations() {
    // The shared store is a plain TypeStore; the instance-only surface
    // works on it too
    sovran_store::set("sharedcounter", 0i32);
    sovran_store::shared()
        .with_mut("sharedcounter", |n: &mut i32| *n += 1)
        .unwrap();

    assert_eq!(sovran_store::get::<i32>("sharedcounter"), 1);
    assert!(sovran_store::shared().contains_key("sharedcounter"));
}
