mod smsnumberutil_tests;
