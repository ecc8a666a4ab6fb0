/// Customer identifiers are server-assigned numeric ids. SharePoint list
/// item ids and the REST backend's integer keys both fit in `i64`.
pub type CustomerId = i64;
