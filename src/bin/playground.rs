use std::env;
use std::path::Path;

use colored::Colorize;

use combinator_kit::closures::{
    apply_k_times, apply_then_increment, for_each, string_length, string_value, sum_mapped,
};
use combinator_kit::patterns::{classify_complex, int_division, Location};
use combinator_kit::pipeline::{join_with, max_with_seed, sum_of_odd_squares};
use combinator_kit::sort::divisor_count_less;
use combinator_kit::{
    build_comparator, fold, make_counter, make_multiplier, map_seq, zip_truncate, Direction, SeqExt,
    Settings, SharedCounter,
};

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

fn main() -> combinator_kit::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };
    println!("{} {:?}", "Settings:".dimmed(), settings);

    // =========================================================================
    // Milestone 1: Functions as values
    // =========================================================================
    section("Comparators");
    let f1 = build_comparator::<i32>(true.into());
    let f2 = build_comparator::<i32>(Direction::Ascending);
    println!("greater_than(4, 3) = {}", f1(&4, &3));
    println!("less_than(4, 3)    = {}", f2(&4, &3));

    println!("string_length(\"123\") + 1 = {}", apply_then_increment(string_length, "123"));
    println!("string_value(\"123\") + 1  = {}", apply_then_increment(string_value, "123"));

    // =========================================================================
    // Milestone 2: Closures that capture
    // =========================================================================
    section("Stateful closures");
    let mut iterator = make_counter(1, 1);
    let first_three: Vec<i64> = (0..3).map(|_| iterator.call()).collect();
    println!("counter(1, 1) -> {:?}, then {}", first_three, iterator.call());

    match settings.make_counter(10, -3) {
        Ok(stepped) => println!("counter(10, -3) -> {:?}", stepped.take(4).collect::<Vec<_>>()),
        Err(err) => println!("{} {err}", "counter(10, -3) rejected:".yellow()),
    }

    let shared = SharedCounter::new(100, 1);
    let other = shared.clone();
    println!("shared counter -> {}, {}", shared.call(), other.call());

    let doubler = make_multiplier(2);
    let tripler = make_multiplier(3);
    println!("doubler(10) = {}, tripler(10) = {}", doubler(10), tripler(10));

    println!("sum of 1..=5 = {}", sum_mapped(1, 5, |x| x)?);
    let mut printed = 0;
    apply_k_times(3, || printed += 1)?;
    println!("apply_k_times ran {printed} times");

    // =========================================================================
    // Milestone 3: map / filter / fold
    // =========================================================================
    section("Pipelines");
    let all_numbers = [4, 7, 1, 11, 6, 5, 6];
    println!("max via fold = {}", max_with_seed(all_numbers, 0));
    println!("joined = {:?}", join_with(["Hi", "There"], " "));
    println!("sum of odd squares in 1..=6 = {}", sum_of_odd_squares(1..=6)?);
    println!("fold([1, 2, 3, 4], 0, +) = {}", fold([1, 2, 3, 4], 0, |a, b| a + b));

    let collections = vec![vec![5, 2, 7], vec![4, 8], vec![9, 1, 3]];
    let flat: Vec<i32> = collections.iter().flat_map_seq(|v| v.iter().copied()).collect();
    let only_even: Vec<i32> = collections
        .into_iter()
        .flat_map_seq(|v| v.into_iter().filter_seq(|x| x % 2 == 0))
        .collect();
    println!("flattened = {flat:?}, evens = {only_even:?}");

    let even_squares: Vec<i32> = map_seq([20, 17, 35, 4, 12], |x| x * x)
        .filter_seq(|x| x % 2 == 0)
        .collect();
    println!("even squares = {even_squares:?}");

    print!("for_each squares:");
    for_each([1, 2, 3, 4, 5], |value| print!(" {}", value * value));
    println!();

    // =========================================================================
    // Milestone 4: zip-combine and custom sort
    // =========================================================================
    section("Zip and sort");
    let products = settings.zip_combine([1, 2, 3], [4, 5, 6], |a, b| a * b)?;
    println!("combine([1, 2, 3], [4, 5, 6], *) = {products:?}");

    match settings.zip_combine([1, 2, 3], [4, 5], |a, b| a * b) {
        Ok(truncated) => println!("unequal inputs truncated to {truncated:?}"),
        Err(err) => println!("{} {err}", "unequal inputs rejected:".yellow()),
    }

    let numbered: Vec<String> =
        zip_truncate(make_counter(1, 1), ["a", "b", "c"], |n, s| format!("{n}.{s}")).collect();
    println!("numbered = {numbered:?}");

    let mut some_array = vec![1u64, 2, 3, 4, 5, 6];
    settings.sort_by(&mut some_array, divisor_count_less);
    println!("by divisor count = {some_array:?}");

    // =========================================================================
    // Milestone 5: Enums and tuples
    // =========================================================================
    section("Patterns");
    let location = Location::Address {
        street: "94 Adams St".into(),
        city: "Waltham".into(),
    };
    let lat_long = Location::LatLong { lat: 41.45, long: -71.90 };
    println!("{location}");
    println!("{lat_long}");

    let result = int_division(15, 5)?;
    println!("15 / 5 -> quotient {}, remainder {}", result.quotient, result.remainder);
    println!("(1, 1): {}", classify_complex((1, 1)));

    println!("\n{}", "Done.".green());
    Ok(())
}
