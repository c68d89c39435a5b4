pub mod registration_rules;
