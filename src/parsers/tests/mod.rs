mod answer_tests;
