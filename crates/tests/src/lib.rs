#[cfg(test)]
mod common;

#[cfg(test)]
mod citation_client_tests;

#[cfg(test)]
mod citation_error_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod search_flow_tests;
