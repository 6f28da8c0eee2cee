//! End-to-end tests over real loopback sockets and the system resolver.

mod dialing {
    mod integration;
}

mod pipeline {
    mod integration;
}
