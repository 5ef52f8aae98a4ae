//! Interactive prompt helpers
//!
//! Each reader prints its prompt, flushes, and reads one trimmed line.
//! The ranged readers re-prompt on non-numeric or out-of-range input
//! instead of failing; only a real I/O error (closed stdin) propagates.

use std::io::{self, BufRead, Write as _};

use shared::{AppError, AppResult};

/// Read one trimmed line after printing a prompt
pub fn read_line(prompt: &str) -> AppResult<String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::io("flushing stdout", e))?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// One trimmed line from the reader. A 0-byte read means the input is
/// closed and surfaces as an error, so the prompt loops terminate instead
/// of spinning on empty reads.
fn read_trimmed_line(input: &mut impl BufRead) -> AppResult<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| AppError::io("reading stdin", e))?;
    if read == 0 {
        return Err(AppError::io(
            "stdin closed",
            io::ErrorKind::UnexpectedEof.into(),
        ));
    }
    Ok(line.trim().to_string())
}

/// Read a line, substituting a default when the answer is empty
pub fn read_line_or(prompt: &str, default: &str) -> AppResult<String> {
    let value = read_line(prompt)?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

/// Read an integer within an inclusive range, re-prompting until valid
pub fn read_i32_in(prompt: &str, min: i32, max: i32) -> AppResult<i32> {
    loop {
        match read_line(prompt)?.parse::<i32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            Ok(_) => println!("Enter a number between {min} and {max}."),
            Err(_) => println!("Invalid number, try again."),
        }
    }
}

/// Read an id, re-prompting until it parses
pub fn read_u32(prompt: &str) -> AppResult<u32> {
    loop {
        match read_line(prompt)?.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid number, try again."),
        }
    }
}

/// Read an amount within an inclusive range, re-prompting until valid
pub fn read_f64_in(prompt: &str, min: f64, max: f64) -> AppResult<f64> {
    loop {
        match read_line(prompt)?.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= min && value <= max => return Ok(value),
            Ok(_) => println!("Enter an amount between {min} and {max}."),
            Err(_) => println!("Invalid amount, try again."),
        }
    }
}

/// Read a yes/no answer, re-prompting until recognizable
pub fn read_bool(prompt: &str) -> AppResult<bool> {
    loop {
        match read_line(prompt)?.to_lowercase().as_str() {
            "y" | "yes" | "true" => return Ok(true),
            "n" | "no" | "false" => return Ok(false),
            _ => println!("Answer y or n."),
        }
    }
}
