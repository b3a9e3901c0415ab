// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider year wheel project*
//!
//! This crate contains the year wheel procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitInt, Token, parse_macro_input, punctuated::Punctuated};

// TODO: these are copied from the chrono limits (so are not synced)
const MIN_YEAR: i64 = -262_143;
const MAX_YEAR: i64 = 262_142;

/// Whether the year is a leap year in the proleptic Gregorian calendar
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The number of days in the month (month must be 1 <= month <= 12)
fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parse a literal as an i64, or produce a compile error spanning it
fn parse_component(lit: &LitInt) -> Result<i64, syn::Error> {
    lit.base10_parse::<i64>()
        .map_err(|_| syn::Error::new_spanned(lit, "Expected a valid integer literal"))
}

/// Create a `chrono::NaiveDate`, using `ymd!(2025, 5, 5)`, with compile time
/// checking of the year, month, and day.
#[proc_macro]
pub fn ymd(input: TokenStream) -> TokenStream {
    let parts = parse_macro_input!(input with Punctuated::<LitInt, Token![,]>::parse_terminated);
    let lits: Vec<LitInt> = parts.into_iter().collect();

    if lits.len() != 3 {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "Expected exactly 3 integer literals: ymd!(year, month, day)",
        )
        .to_compile_error()
        .into();
    }

    let (year, month, day) = match (
        parse_component(&lits[0]),
        parse_component(&lits[1]),
        parse_component(&lits[2]),
    ) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => {
            return error.to_compile_error().into();
        }
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return syn::Error::new_spanned(
            &lits[0],
            format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"),
        )
        .to_compile_error()
        .into();
    }

    if !(1..=12).contains(&month) {
        return syn::Error::new_spanned(&lits[1], "Month must be between 1 and 12")
            .to_compile_error()
            .into();
    }

    let max_day = days_in_month(year, month);
    if !(1..=max_day).contains(&day) {
        return syn::Error::new_spanned(&lits[2], format!("Day must be between 1 and {max_day}"))
            .to_compile_error()
            .into();
    }

    let year = year as i32;
    let month = month as u32;
    let day = day as u32;
    quote! {
        ::chrono::NaiveDate::from_ymd_opt(#year, #month, #day).unwrap()
    }
    .into()
}
