mod form_test;
