//! Shared fixtures for integration tests.

use contact_book::AddressBook;

/// Book with the three-phone Alexander contact.
#[allow(dead_code)]
pub fn alexander_book() -> AddressBook {
    let mut book = AddressBook::default();
    let alexander = book.add_record("Alexander").unwrap();
    alexander.add_phone("111111111").unwrap();
    alexander.add_phone("111111112").unwrap();
    alexander.add_phone("111111113").unwrap();
    alexander.set_birthday("30-09-2022").unwrap();
    alexander.set_email("abc@gmail.com").unwrap();
    book
}

/// Book with a few contacts covering every field combination.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = alexander_book();

    let boris = book.add_record("Борис").unwrap();
    boris.add_phone("+380 50 123 45 67").unwrap();
    boris.set_email("Boris.K@Example.org").unwrap();

    let chloe = book.add_record("Chloe").unwrap();
    chloe.set_birthday("29/02/2000").unwrap();

    book.add_record("Dmytro").unwrap();
    book
}
