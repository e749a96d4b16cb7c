mod translate_text_test;
