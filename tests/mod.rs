
// This file organizes the integration tests into a cohesive test suite.
// - smoke_tests: config loading and the validator's documented boundary cases
// - api_tests: the scheduling endpoints driven in-process through the router
