use remap::Mappable;

#[derive(Default, Mappable)]
enum Status {
    #[default]
    Active,
}

fn main() {
    let _ = Status::Active;
}
