/// Builds a [`Record`](crate::Record) from `name => value` pairs.
///
/// ```
/// # use remap_core::{record, Value};
/// let record = record! { "name" => "Claire", "age" => 25 };
/// assert_eq!(record.get("age"), Some(&Value::I32(25)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($name, $crate::Value::from($value));
        )+
        record
    }};
}
