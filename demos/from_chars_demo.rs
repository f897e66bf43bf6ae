// Runs a table of literals through from_chars and reports what was matched.
// Run with: cargo run --example from_chars_demo

use from_chars::{from_chars, CharsFormat, ErrorCode, Extended, FromChars};
use std::fmt::Debug;
use std::process;

/// What a case should produce: `Ok` with the value as text (compared through
/// `Debug`), or the error code, plus the match length either way.
struct Case {
    input: &'static str,
    format: CharsFormat,
    expected: Result<&'static str, ErrorCode>,
    len: usize,
}

const fn ok(input: &'static str, format: CharsFormat, value: &'static str, len: usize) -> Case {
    Case {
        input,
        format,
        expected: Ok(value),
        len,
    }
}

const fn err(input: &'static str, format: CharsFormat, code: ErrorCode, len: usize) -> Case {
    Case {
        input,
        format,
        expected: Err(code),
        len,
    }
}

fn run<F>(number: usize, case: &Case) -> bool
where
    F: FromChars + Debug,
{
    println!("[Test Number {}: {:?} as {}]", number, case.input, case.format);
    let result = from_chars::<F>(case.input.as_bytes(), case.format);
    let (actual, len) = match result {
        Ok((value, len)) => (Ok(format!("{:?}", value)), len),
        Err(error) => (Err(error.code()), error.offset()),
    };

    println!("match length: {}", len);
    match &actual {
        Ok(value) => println!("status: ok\nresult: {}", value),
        Err(code) => println!("status: {}", code),
    }

    let passed = len == case.len && actual.as_deref() == case.expected.as_deref();
    if !passed {
        eprintln!(
            "expected {:?} with match length {}, got {:?} with match length {}",
            case.expected, case.len, actual, len,
        );
    }
    println!(
        "[Test Number {} {}]\n",
        number,
        if passed { "PASSED" } else { "FAILED" }
    );
    passed
}

fn main() {
    use CharsFormat as Format;
    use ErrorCode::*;

    let doubles = [
        ok("5", Format::GENERAL, "5.0", 1),
        err("5", Format::SCIENTIFIC, InvalidLiteral, 0),
        ok(" \t3.1", Format::GENERAL, "3.1", 5),
        ok("15e-5", Format::GENERAL, "0.00015", 5),
        ok("f.4p+2a", Format::HEX, "61.0", 6),
        ok("-InF", Format::GENERAL, "-inf", 4),
        err("", Format::GENERAL, InvalidLiteral, 0),
    ];
    let floats = [
        err("+1", Format::GENERAL, InvalidLiteral, 0),
        ok("4E3", Format::FIXED, "4.0", 1),
        ok("-2", Format::GENERAL, "-2.0", 2),
        ok("-51.23P23", Format::HEX, "-680624100.0", 9),
        ok("INfInItY", Format::GENERAL, "inf", 8),
        ok("Nan", Format::GENERAL, "NaN", 3),
        ok("NAN(slk38_klj)", Format::GENERAL, "NaN", 14),
        ok("nan(*)", Format::GENERAL, "NaN", 3),
        err("51E200", Format::GENERAL, OutOfRange, 6),
        err("hello", Format::GENERAL, InvalidLiteral, 0),
        ok("4.5", Format::GENERAL, "4.5", 3),
        ok("5E", Format::GENERAL, "5.0", 1),
        err("5E", Format::SCIENTIFIC, InvalidLiteral, 0),
        ok("3E+", Format::GENERAL, "3.0", 1),
        err("3E+", Format::SCIENTIFIC, InvalidLiteral, 0),
    ];
    let extendeds = [
        ok("0x123", Format::GENERAL, "0", 1),
        ok("4E3", Format::GENERAL, "0xfa00000000000000p-52", 3),
    ];

    let mut number = 0;
    let mut failures = 0;
    let mut tally = |passed: bool| {
        if !passed {
            failures += 1;
        }
    };
    for case in &doubles {
        number += 1;
        tally(run::<f64>(number, case));
    }
    for case in &floats {
        number += 1;
        tally(run::<f32>(number, case));
    }
    for case in &extendeds {
        number += 1;
        tally(run::<Extended>(number, case));
    }

    if failures == 0 {
        println!("SUCCESS: All tests passed!");
    } else {
        println!("FAILURE: {} tests failed!", failures);
        process::exit(1);
    }
}
