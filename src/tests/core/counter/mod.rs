mod counter_test;
