use super::GlobalArgs;

pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let widget = super::open_widget(global)?;
    let storage = widget.repository().storage();
    let store = storage.store();

    println!("Origin:       {}", store.origin());
    println!("Storage key:  {}", storage.key());

    let keys = store.keys()?;
    if keys.is_empty() {
        println!("Stored keys:  none");
    } else {
        println!("Stored keys:  {}", keys.join(", "));
    }

    match storage.load() {
        Ok(reviews) => println!("Reviews:      {}", reviews.len()),
        Err(e) => println!("Reviews:      unreadable ({e})"),
    }
    Ok(())
}
