use typeddict::typed::typedkey::TypedKey;

fn main() {
    let settings = typeddict::dictionary("settings".into());

    let greeting = TypedKey::new("greeting", String::from("hello"));
    let retries = TypedKey::new("retries", 3u32);
    let verbose = TypedKey::new("verbose", false);

    // Nothing is stored yet, so every read materializes its key's default.
    assert_eq!(settings.get(&greeting), "hello");
    assert_eq!(settings.get(&retries), 3);
    assert!(!settings.get(&verbose));

    settings.set(&retries, 5);
    settings.set(&verbose, true);

    println!(
        "greeting={:?} retries={} verbose={}",
        settings.get(&greeting),
        settings.get(&retries),
        settings.get(&verbose)
    );

    // Any other handle to the same named dictionary sees the overrides.
    assert_eq!(typeddict::dictionary("settings".into()).get(&retries), 5);
}
