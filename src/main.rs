use std::cell::Cell;

use functimer::{func_name, ternary, timed, timed_named};

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

fn is_palindrome(s: &str) -> bool {
    s == reverse(s)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let phrase = "step on no pets";
    let result = Cell::new(false);

    let mut named = timed_named(&is_palindrome, || {
        result.set(is_palindrome(phrase));
    });
    named();

    let mut plain = timed(|| {
        result.set(is_palindrome(phrase));
    });
    plain();

    println!("resolved name: {}", func_name(&is_palindrome));
    println!(
        "is_palindrome({:?}) == {}",
        phrase,
        ternary(result.get(), "yes", "no"),
    );
}
