mod field_resolver_tests;
