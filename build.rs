fn main() {
    // Wire up the ESP-IDF build environment only when building for the
    // target; host builds (tests) skip it entirely.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
