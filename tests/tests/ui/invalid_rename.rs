use remap::Mappable;

#[derive(Default, Mappable)]
struct Person {
    #[remap(rename = "first name")]
    first_name: Option<String>,
}

fn main() {
    let _ = Person::default().first_name;
}
