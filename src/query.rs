// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Query boundary for contributor data
//
// The HTTP endpoint, routing and data retrieval live elsewhere; this
// module only fixes the shape of the collaborator seam. The handler is
// plain function composition, no injection framework involved.

use log::debug;

/// Supplies contributor data for a named community.
///
/// Implemented by the external query layer; the masking library never
/// calls into it.
pub trait QueryService {
    fn query_contributors(&self, community: &str) -> String;
}

/// Handle a contributor query for one community.
pub fn handle_query<S: QueryService>(service: &S, community: &str) -> String {
    debug!("querying contributors for community {community}");
    service.query_contributors(community)
}
