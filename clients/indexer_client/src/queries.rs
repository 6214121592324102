//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

pub const FETCH_ALL_DIGITAL_GOODS: &str = r#"
  query FetchAllDigitalGoods {
    digitalGoods(first: 20, orderBy: tokenId, orderDirection: desc, where: {remainingSupply_gt: "0"}) {
      tokenId
      name
      description
      category
      lister
      listerPrice
      remainingSupply
      previewLink
    }
  }
"#;

pub const FETCH_FILTERED_DIGITAL_GOODS: &str = r#"
  query FetchDigitalGoods($searchTerm: String!) {
    digitalGoods(
      first: 20
      orderBy: tokenId
      orderDirection: desc
      where: {name_contains_nocase: $searchTerm, remainingSupply_gt: "0"}) {
      tokenId
      name
      description
      category
      lister
      listerPrice
      remainingSupply
      previewLink
    }
  }
"#;
