mod instructor_test;
mod lesson_test;
mod middleware_test;
