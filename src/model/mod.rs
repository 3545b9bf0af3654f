/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP dispatch core with authentication and status classification
pub mod http;
/// Query parameters for list and search endpoints
pub mod requests;
/// List envelopes returned by the API
pub mod responses;
