use super::Names;

pub fn component_ts(names: &Names) -> String {
    let Names { kebab, pascal, .. } = names;
    format!(
        r#"import {{ Component }} from '@angular/core';

@Component({{
  selector: 'app-{kebab}',
  standalone: true,
  templateUrl: './{kebab}.component.html',
  styleUrls: ['./{kebab}.component.scss'],
}})
export class {pascal}Component {{}}
"#
    )
}

pub fn component_html(names: &Names) -> String {
    format!("<p>app-{} works!</p>\n", names.kebab)
}

pub fn component_scss(names: &Names) -> String {
    format!("/* Styles for app-{} */\n", names.kebab)
}

pub fn model(names: &Names) -> String {
    format!("export interface {} {{\n}}\n", names.pascal)
}

pub fn guard(names: &Names) -> String {
    format!(
        r#"import {{ CanActivateFn }} from '@angular/router';

export const {pascal}Guard: CanActivateFn = (route, state) => {{
  return true;
}};
"#,
        pascal = names.pascal
    )
}

pub fn directive(names: &Names) -> String {
    format!(
        r#"import {{ Directive, ElementRef }} from '@angular/core';

@Directive({{
  selector: '[app{pascal}]',
  standalone: true,
}})
export class {pascal}Directive {{
  constructor(private el: ElementRef) {{}}
}}
"#,
        pascal = names.pascal
    )
}

pub fn pipe(names: &Names) -> String {
    format!(
        r#"import {{ Pipe, PipeTransform }} from '@angular/core';

@Pipe({{
  name: '{camel}',
  standalone: true,
}})
export class {pascal}Pipe implements PipeTransform {{
  transform(value: unknown, ...args: unknown[]): unknown {{
    return value;
  }}
}}
"#,
        camel = names.camel,
        pascal = names.pascal
    )
}
