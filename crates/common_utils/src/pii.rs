//! Personal Identifiable Information protection.

use std::fmt;

use masking::{Secret, Strategy, WithType};

/// Strategy for masking an email address
#[derive(Debug)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((local, domain)) => write!(f, "{}@{}", "*".repeat(local.len()), domain),
            None => WithType::fmt(val, f),
        }
    }
}

/// Email address of a buyer, customer or vendor contact
pub type Email = Secret<String, EmailStrategy>;

/// Strategy for masking a phone number
#[derive(Debug)]
pub enum PhoneNumberStrategy {}

impl<T> Strategy<T> for PhoneNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        match val_str
            .len()
            .checked_sub(4)
            .and_then(|start| val_str.get(start..).map(|tail| (start, tail)))
        {
            // masks everything but the last 4 characters
            Some((start, tail)) => write!(f, "{}{}", "*".repeat(start), tail),
            None => WithType::fmt(val, f),
        }
    }
}

/// Phone number of a buyer, customer or vendor contact
pub type PhoneNumber = Secret<String, PhoneNumberStrategy>;

/// Strategy for masking payment tokens (card nonces, verification tokens), keeping the
/// type prefix (`cnon:`, `verf:`) visible
#[derive(Debug)]
pub enum PaymentTokenStrategy {}

impl<T> Strategy<T> for PaymentTokenStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match val.as_ref().split_once(':') {
            Some((prefix, _)) => write!(f, "{prefix}:*** ***"),
            None => f.write_str("*** ***"),
        }
    }
}

/// Single-use payment token
pub type PaymentToken = Secret<String, PaymentTokenStrategy>;
