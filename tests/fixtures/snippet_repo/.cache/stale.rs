// BEGIN SNIPPET hidden
// END SNIPPET
