//! Reference grammar implemented by `expr/` and `stmt/`, lowest precedence
//! first. Kept as plain documentation rather than used by the parser itself;
//! each production named here has a same-named function in `expr/` or `stmt/`.
//!
//! ```text
//! file_input     → (NEWLINE | stmt)* ENDMARKER
//!
//! stmt           → simple_stmt | compound_stmt
//! simple_stmt    → small_stmt (';' small_stmt)* [';'] NEWLINE
//! small_stmt     → expr_stmt | pass_stmt | flow_stmt | import_stmt
//!                | global_stmt | exec_stmt | assert_stmt | print_stmt
//! expr_stmt      → testlist (augassign testlist | ('=' testlist)*)
//! augassign      → '+=' | '-=' | '*=' | '/=' | '%=' | '**=' | '//='
//!                | '>>=' | '<<=' | '&=' | '|=' | '^='
//! flow_stmt      → break_stmt | continue_stmt | return_stmt | raise_stmt
//!
//! compound_stmt  → if_stmt | while_stmt | for_stmt | try_stmt
//!                | with_stmt | funcdef | classdef
//! suite          → simple_stmt | NEWLINE INDENT stmt+ DEDENT
//!
//! test           → lambdef | or_test ['if' or_test 'else' test]
//! or_test        → and_test ('or' and_test)*
//! and_test       → not_test ('and' not_test)*
//! not_test       → 'not' not_test | comparison
//! comparison     → expr (comp_op expr)*
//! comp_op        → '<'|'>'|'=='|'>='|'<='|'<>'|'!='|'in'|'not' 'in'|'is'|'is' 'not'
//! expr           → xor_expr ('|' xor_expr)*
//! xor_expr       → and_expr ('^' and_expr)*
//! and_expr       → shift_expr ('&' shift_expr)*
//! shift_expr     → arith_expr (('<<'|'>>') arith_expr)*
//! arith_expr     → term (('+'|'-') term)*
//! term           → factor (('*'|'/'|'%'|'//') factor)*
//! factor         → ('+'|'-'|'~') factor | power
//! power          → atom_trailer ['**' factor]
//! atom_trailer   → atom trailer*
//! trailer        → '(' [arglist] ')' | '[' subscriptlist ']' | '.' NAME
//!
//! atom           → '(' [yield_expr | testlist_comp] ')'
//!                | '[' [listmaker] ']' | '{' [dictorsetmaker] '}'
//!                | '`' testlist1 '`' | NAME | NUMBER | STRING+ | '...'
//! testlist_comp  → test ( comp_for | (',' test)* [','] )
//! dictorsetmaker → (test ':' test (comp_for | (',' test ':' test)* [','])
//!                | test (comp_for | (',' test)* [',']))
//! comp_for       → 'for' exprlist 'in' or_test [comp_iter]
//! comp_iter      → comp_for | comp_if
//! comp_if        → 'if' test [comp_iter]
//! yield_expr     → 'yield' [testlist]
//!
//! subscript      → '.' '.' '.' | test | [test] ':' [test] [sliceop]
//! sliceop        → ':' [test]
//!
//! arglist        → (argument ',')* (argument | '*' test | '**' test)
//! argument       → test ['=' test]
//!
//! varargslist    → (fpdef ['=' test] ',')* ('*' NAME | '**' NAME | fpdef ['=' test])
//! lambdef        → 'lambda' [varargslist] ':' test
//!
//! if_stmt        → 'if' test ':' suite ('elif' test ':' suite)* ['else' ':' suite]
//! while_stmt     → 'while' test ':' suite ['else' ':' suite]
//! for_stmt       → 'for' exprlist 'in' testlist ':' suite ['else' ':' suite]
//! try_stmt       → 'try' ':' suite
//!                  (except_clause ':' suite)+ ['else' ':' suite]
//!                | 'try' ':' suite 'finally' ':' suite
//! with_stmt      → 'with' test ['as' expr] ':' suite
//! funcdef        → 'def' NAME parameters ':' suite
//! classdef       → 'class' NAME ['(' [testlist] ')'] ':' suite
//! ```
