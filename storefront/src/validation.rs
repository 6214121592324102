//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use bigdecimal::{BigDecimal, ToPrimitive};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    amount::parse_plain_decimal,
    error::ValidationError,
    listing::{Listing, ListingForm, NewListing},
    Amount,
};

/// Parses the quantity a buyer entered and checks it against the listing's remaining supply.
///
/// The input is only accepted if it is written exactly as the canonical form of a positive integer, so `"3"` is
/// valid but `"03"`, `"+3"`, `" 3"`, `"3.0"` and `"3abc"` are not. Integers too large for a `u64` are well formed but
/// always exceed the supply.
pub fn validate_quantity(listing: &Listing, input: &str) -> Result<u64, ValidationError> {
    static CANONICAL_POSITIVE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("valid regex"));
    if !CANONICAL_POSITIVE_INTEGER.is_match(input) {
        return Err(ValidationError::InvalidQuantity);
    }

    let insufficient = ValidationError::InsufficientSupply {
        available: listing.remaining_supply,
    };
    let quantity = input.parse::<u64>().map_err(|_| insufficient.clone())?;
    if quantity > listing.remaining_supply {
        return Err(insufficient);
    }

    Ok(quantity)
}

/// A whole, strictly positive total supply. Decimal notation without a fractional part (`10.0`) is accepted.
fn parse_total_supply(s: &str) -> Result<u64, ValidationError> {
    let value = parse_plain_decimal(s).ok_or(ValidationError::InvalidTotalSupply)?;
    if !value.is_integer() || value <= BigDecimal::from(0u64) {
        return Err(ValidationError::InvalidTotalSupply);
    }
    value.to_u64().ok_or(ValidationError::TotalSupplyTooLarge)
}

impl ListingForm {
    /// Checks the total supply, then the price, and converts the price from ether to wei.
    pub fn validate(&self) -> Result<NewListing, ValidationError> {
        let total_supply = parse_total_supply(&self.total_supply)?;
        let price = Amount::from_ether_str(&self.lister_price)?;

        Ok(NewListing {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price,
            total_supply,
            preview_link: self.preview_link.clone(),
            access_link: self.access_link.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{listing::ListingId, Address};

    fn listing_with_supply(remaining_supply: u64) -> Listing {
        Listing {
            id: ListingId::new(1),
            name: "Pattern pack".to_string(),
            description: "Knitting patterns".to_string(),
            category: "crafts".to_string(),
            lister: Address::from_array([0xab; 20]),
            unit_price: Amount::from(1_000u64),
            remaining_supply,
            preview_link: "https://example.com/p.png".to_string(),
        }
    }

    fn form(lister_price: &str, total_supply: &str) -> ListingForm {
        ListingForm {
            name: "Pattern pack".to_string(),
            lister_price: lister_price.to_string(),
            total_supply: total_supply.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_canonical_positive_integers() {
        let listing = listing_with_supply(5);
        assert_eq!(validate_quantity(&listing, "1"), Ok(1));
        assert_eq!(validate_quantity(&listing, "5"), Ok(5));
    }

    #[test]
    fn rejects_non_canonical_quantities() {
        let listing = listing_with_supply(100);
        for input in ["", "0", "-1", "+3", "03", " 3", "3 ", "3.0", "2.5", "3abc", "1e1", "abc"] {
            assert_eq!(
                validate_quantity(&listing, input),
                Err(ValidationError::InvalidQuantity),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn rejects_quantities_above_supply() {
        let listing = listing_with_supply(2);
        assert_eq!(
            validate_quantity(&listing, "3"),
            Err(ValidationError::InsufficientSupply { available: 2 })
        );
        // One past u64::MAX is still a well formed quantity
        assert_eq!(
            validate_quantity(&listing, "18446744073709551616"),
            Err(ValidationError::InsufficientSupply { available: 2 })
        );
        assert_eq!(
            validate_quantity(&listing, "100000000000000000000"),
            Err(ValidationError::InsufficientSupply { available: 2 })
        );
        // Format errors are reported before supply errors
        assert_eq!(validate_quantity(&listing, "3.5"), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn listing_form_validation() {
        assert_eq!(form("1", "10.5").validate(), Err(ValidationError::InvalidTotalSupply));
        assert_eq!(form("1", "0").validate(), Err(ValidationError::InvalidTotalSupply));
        assert_eq!(form("1", "").validate(), Err(ValidationError::InvalidTotalSupply));
        assert_eq!(form("-1", "10").validate(), Err(ValidationError::InvalidListerPrice));
        assert_eq!(form("free", "10").validate(), Err(ValidationError::InvalidListerPrice));
        // Supply is checked first
        assert_eq!(form("-1", "0").validate(), Err(ValidationError::InvalidTotalSupply));

        assert_eq!(form("1", "10.0").validate().map(|l| l.total_supply), Ok(10));

        let listing = form("0.5", "100").validate().unwrap();
        assert_eq!(listing.total_supply, 100);
        assert_eq!(listing.price, Amount::from(500_000_000_000_000_000u64));
        assert_eq!(listing.name, "Pattern pack");
    }

    #[test]
    fn exponent_notation_is_refused_in_both_fields() {
        for input in ["1e999999999", "1e-999999999"] {
            assert_eq!(form("1", input).validate(), Err(ValidationError::InvalidTotalSupply));
            assert_eq!(form(input, "1").validate(), Err(ValidationError::InvalidListerPrice));
        }
    }

    #[test]
    fn total_supply_beyond_u64_is_too_large() {
        assert_eq!(
            form("1", "18446744073709551616").validate(),
            Err(ValidationError::TotalSupplyTooLarge)
        );
        assert_eq!(
            form("1", "18446744073709551615").validate().map(|l| l.total_supply),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn total_supply_parsing() {
        assert_eq!(parse_total_supply("100"), Ok(100));
        assert_eq!(parse_total_supply(" 7 "), Ok(7));
        for input in ["10.5", "0", "0.0", "-3", "", "ten"] {
            assert_eq!(
                parse_total_supply(input),
                Err(ValidationError::InvalidTotalSupply),
                "input {:?}",
                input
            );
        }
    }
}
