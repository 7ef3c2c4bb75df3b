//! Repository implementations

pub mod loan;

pub use loan::LoanRepository;
